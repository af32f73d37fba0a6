use thiserror::Error;

/// Failure kinds surfaced by the repository. Every public operation returns
/// exactly one of these inside a [`CatalogResult`]; no other error type
/// crosses the repository boundary.
#[derive(Error, Debug)]
pub enum Failure {
    #[error("network unavailable")]
    NetworkUnavailable,

    #[error("movie payload could not be parsed: {0}")]
    Parsing(#[from] ParseError),

    #[error("lookup for movie {id} matched {matches} records")]
    Lookup { id: u64, matches: usize },

    #[error("unexpected catalog failure: {0}")]
    Server(#[source] anyhow::Error),
}

/// Deserializer and mapper failures. Carried as the cause inside
/// [`Failure::Parsing`].
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("payload is not a well-formed movie list: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("movie record {index} has no id")]
    MissingId { index: usize },

    #[error("movie record {index} has negative id {id}")]
    NegativeId { index: usize, id: i64 },
}

/// IO-kind errors from the asset store. The repository classifies these as
/// [`Failure::Server`], keeping the cause chain intact for diagnostics.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("could not read asset {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("request for {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {field}: {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("could not read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config file {path} is not valid TOML: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl From<SourceError> for Failure {
    fn from(err: SourceError) -> Self {
        Failure::Server(err.into())
    }
}

pub type CatalogResult<T> = std::result::Result<T, Failure>;
