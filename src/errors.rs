use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignalBoardError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Date parsing error: {0}")]
    DateError(#[from] chrono::ParseError),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, SignalBoardError>;

// 用于从字符串创建错误
impl From<String> for SignalBoardError {
    fn from(s: String) -> Self {
        SignalBoardError::Unknown(s)
    }
}

// 用于从&str创建错误
impl From<&str> for SignalBoardError {
    fn from(s: &str) -> Self {
        SignalBoardError::Unknown(s.to_string())
    }
}
