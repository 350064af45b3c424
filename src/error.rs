use thiserror::Error;

/// Errors reported by canvas operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    /// A drag arrived before any shape was started
    #[error("no shape is being drawn")]
    NoActiveShape,
}

pub type CanvasResult<T = ()> = Result<T, CanvasError>;
