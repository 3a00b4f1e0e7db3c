use thiserror::Error;

/// Errors returned by the strict (`try_*`) counter operations.
///
/// The permissive operations never fail: a missing initial value becomes
/// [`DEFAULT_INITIAL`](crate::counter::DEFAULT_INITIAL) and negative values are
/// stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("initial value must be non-negative, got {0}")]
    NegativeInitial(i64),

    #[error("count must be non-negative, got {0}")]
    NegativeCount(i64),

    #[error("count {count} cannot be incremented without overflow")]
    Overflow { count: i64 },
}

pub type Result<T> = std::result::Result<T, Error>;
