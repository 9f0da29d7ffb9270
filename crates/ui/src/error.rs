use thiserror::Error;

/// Errors raised while driving the terminal.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UiError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
