//! Remote Data State

/// Lifecycle of a value fetched from the API
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Remote<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Remote<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Remote::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Remote::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Still waiting for a terminal state
    pub fn is_pending(&self) -> bool {
        matches!(self, Remote::Idle | Remote::Loading)
    }
}
