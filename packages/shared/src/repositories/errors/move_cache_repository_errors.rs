#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveCacheRepositoryError {
    LockPoisoned,
}

impl std::fmt::Display for MoveCacheRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveCacheRepositoryError::LockPoisoned => write!(f, "Move cache lock is poisoned"),
        }
    }
}

impl std::error::Error for MoveCacheRepositoryError {}
