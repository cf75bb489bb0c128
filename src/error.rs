use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("malformed word bank: {0}")]
    WordBank(#[from] serde_json::Error),
    #[error("word bank has no categories")]
    EmptyWordBank,
    #[error("category `{0}` has no words")]
    EmptyCategory(String),
    #[error("invalid value `{value}` for {key}")]
    InvalidConfig { key: &'static str, value: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
