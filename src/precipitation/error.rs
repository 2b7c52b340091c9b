use crate::transport::FetchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrecipitationError {
    #[error("Station '{0}' has no precipitation archive")]
    MissingArchiveUrl(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to open zip archive downloaded from {url}")]
    ZipOpen {
        url: String,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Failed to open entry '{name}' of archive {url}")]
    ZipEntry {
        url: String,
        name: String,
        #[source]
        source: zip::result::ZipError,
    },

    // The archive does not follow the dataset layout; not recoverable per row.
    #[error("No product file starting with '{prefix}' in archive {url} (entries: {entries:?})")]
    NoProductFile {
        url: String,
        prefix: String,
        entries: Vec<String>,
    },

    #[error("Failed to read entry '{name}' of archive {url}")]
    ProductRead {
        url: String,
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read the header of the product file for station '{station}'")]
    Header {
        station: String,
        #[source]
        source: csv::Error,
    },
}
