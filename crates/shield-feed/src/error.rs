use shield_core::ShieldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid record: {0}")]
    Invalid(#[from] ShieldError),
}

pub type FeedResult<T> = Result<T, FeedError>;
