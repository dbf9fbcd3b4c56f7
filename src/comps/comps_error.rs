use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompsError {
    #[error("could not read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset is not a JSON array of listings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("listing is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("unparseable date: {0:?}")]
    BadDate(String),
}
