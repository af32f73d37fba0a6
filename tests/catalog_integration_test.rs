use anyhow::Result;
use httpmock::prelude::*;
use movie_catalog::{
    AssetCatalog, DirAssets, Failure, Genre, HttpAssets, MovieRepository, Offline, Online,
};
use tempfile::TempDir;

const POPULAR: &str = r#"[
    {
        "id": 278,
        "title": "The Shawshank Redemption",
        "overview": "Framed in the 1940s for the double murder of his wife and her lover, upstanding banker Andy Dufresne begins a new life at the Shawshank prison.",
        "genres": [{"id": 18, "name": "Drama"}, {"id": 80, "name": "Crime"}],
        "vote_count": 12691
    },
    {
        "id": 238,
        "title": "The Godfather",
        "overview": "Spanning the years 1945 to 1955, a chronicle of the fictional Italian-American Corleone crime family.",
        "genres": [{"id": 18, "name": "Drama"}, {"id": 80, "name": "Crime"}],
        "vote_count": 14811
    }
]"#;

#[tokio::test]
async fn end_to_end_catalog_over_local_assets() -> Result<()> {
    let assets_dir = TempDir::new()?;
    std::fs::write(assets_dir.path().join("popular_movies.json"), POPULAR)?;

    let catalog = AssetCatalog::new(Online, DirAssets::new(assets_dir.path()));

    let movies = catalog.get_all().await.unwrap();
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].title, "The Shawshank Redemption");
    assert_eq!(movies[1].title, "The Godfather");

    let movie = catalog.get_by_id(278).await.unwrap();
    assert_eq!(movie.vote_count, 12691);
    assert_eq!(
        movie.genres,
        vec![
            Genre {
                id: 18,
                name: "Drama".to_string()
            },
            Genre {
                id: 80,
                name: "Crime".to_string()
            },
        ]
    );

    let missing = catalog.get_by_id(999).await;
    assert!(matches!(
        missing,
        Err(Failure::Lookup {
            id: 999,
            matches: 0
        })
    ));

    Ok(())
}

#[tokio::test]
async fn end_to_end_catalog_over_http() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/popular_movies.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(POPULAR);
    });

    let catalog = AssetCatalog::new(Online, HttpAssets::new(server.base_url()));

    let movies = catalog.get_all().await.unwrap();
    assert_eq!(movies.len(), 2);

    api_mock.assert();
    Ok(())
}

#[tokio::test]
async fn end_to_end_offline_short_circuits_before_any_request() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/popular_movies.json");
        then.status(200).body(POPULAR);
    });

    let catalog = AssetCatalog::new(Offline, HttpAssets::new(server.base_url()));

    let outcome = catalog.get_all().await;
    assert!(matches!(outcome, Err(Failure::NetworkUnavailable)));

    api_mock.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn end_to_end_custom_resource_name() -> Result<()> {
    let assets_dir = TempDir::new()?;
    std::fs::write(assets_dir.path().join("top_rated.json"), "[]")?;

    let catalog =
        AssetCatalog::new(Online, DirAssets::new(assets_dir.path())).with_resource("top_rated.json");

    let movies = catalog.get_all().await.unwrap();
    assert!(movies.is_empty());

    Ok(())
}
