use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlongError {
    #[error("failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("standard input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OverlongError>;
