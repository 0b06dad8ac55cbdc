use std::path::PathBuf;
use thiserror::Error;

/*-------------------------------------------------------------------------------------------------
  Errors and Results
-------------------------------------------------------------------------------------------------*/

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type used throughout the crate. Every failure aborts the run; nothing is retried or
/// recovered into partial output.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or contradictory run parameters; detected before any data is fetched.
    #[error("Config Error: {0}")]
    Configuration(String),

    /// A region or datacenter label missing the `" : "` separator.
    #[error("malformed location label `{0}`: expected `<code> : <name>`")]
    MalformedLabel(String),

    /// A block `range` that fails to parse as a CIDR network.
    #[error("malformed CIDR `{range}` in datacenter `{datacenter}`: {source}")]
    MalformedCidr {
        range: String,
        datacenter: String,
        #[source]
        source: ipnetwork::IpNetworkError,
    },

    /// The requested cloud is not a key of the retrieved feed.
    #[error("cloud `{0}` not present in the retrieved feed")]
    UnknownCloud(String),

    /// The CSV destination path is not an existing directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    ConfigFile(#[from] config::ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
