use clap::Parser;
use movie_catalog::utils::{logger, validation::Validate};
use movie_catalog::{
    AssetCatalog, AssetStore, CatalogConfig, CliConfig, ConfigError, Connectivity, DirAssets,
    Failure, FileConfig, HttpAssets, MovieRepository, Offline, Online,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting movie-catalog CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config: Box<dyn CatalogConfig> = match &cli.config {
        Some(path) => {
            let file = FileConfig::from_file(path)?;
            exit_on_invalid(file.validate());
            Box::new(file)
        }
        None => {
            exit_on_invalid(cli.validate());
            Box::new(cli.clone())
        }
    };

    let connectivity: Box<dyn Connectivity> = if cli.offline {
        Box::new(Offline)
    } else {
        Box::new(Online)
    };

    let assets: Box<dyn AssetStore> = match config.endpoint() {
        Some(url) => Box::new(HttpAssets::new(url)),
        None => Box::new(DirAssets::new(config.assets_dir())),
    };

    let catalog = AssetCatalog::new(connectivity, assets).with_resource(config.resource());

    let outcome = match cli.movie_id {
        Some(id) => catalog.get_by_id(id).await.map(|movie| vec![movie]),
        None => catalog.get_all().await,
    };

    match outcome {
        Ok(movies) => {
            tracing::info!("✅ fetched {} movies", movies.len());
            println!("{}", serde_json::to_string_pretty(&movies)?);
        }
        Err(failure) => {
            tracing::error!("❌ catalog request failed: {}", failure);
            eprintln!("❌ {}", failure);

            let exit_code = match failure {
                Failure::Server(_) => 1,
                Failure::NetworkUnavailable => 2,
                Failure::Parsing(_) => 3,
                Failure::Lookup { .. } => 4,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn exit_on_invalid(result: Result<(), ConfigError>) {
    if let Err(e) = result {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
