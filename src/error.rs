use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlackjackError {
    #[error("card rank {0} is outside 1..=13")]
    RankOutOfRange(u8),
    #[error("pip value {0} is outside 2..=11")]
    InvalidPipValue(u8),
    #[error("card source has no cards left")]
    SourceExhausted,
    #[error("unknown action ordinal {0}")]
    UnknownAction(u8),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, BlackjackError>;
