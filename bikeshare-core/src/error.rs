use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum BikeshareError {
    #[error("Error reading from '{path}': {message}")]
    ReadError { path: PathBuf, message: String },
    #[error("Invalid trip at row {row}: {message}")]
    InvalidRow { row: usize, message: String },
    #[error("error due to dataset contents: {0}")]
    InvalidData(String),
    #[error("dataset is missing required column '{0}'")]
    MissingColumn(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("console i/o failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("input stream closed while waiting for a response")]
    InputClosed,
}
