use thiserror::Error;

/// UPI QR error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("QR encoding failed: {0}")]
    QrEncoding(String),

    #[error("Image encoding failed: {0}")]
    Image(String),
}

pub type Result<T> = std::result::Result<T, Error>;
