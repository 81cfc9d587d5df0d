use thiserror::Error;

pub type Result<T> = std::result::Result<T, EvalError>;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("self interest scale must be between 0 and 1, got {0}")]
    ScaleOutOfRange(f64),

    #[error("no actions to rank")]
    NoActions,

    #[error("invalid dilemma: {0}")]
    Scenario(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
