//! Error types for component actions and settings persistence

/// Errors produced by component create/destroy actions and settings I/O
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("entity does not exist: {0}")]
    NoSuchEntity(#[from] hecs::NoSuchEntity),

    #[error("component error: {0}")]
    Component(#[from] hecs::ComponentError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
