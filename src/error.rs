use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::MissingColumn(_) | Error::Csv(_))
    }
}
