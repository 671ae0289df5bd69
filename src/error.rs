//! Error types for btm-syntax

use thiserror::Error;

/// Result type alias for highlighting operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighting error types
///
/// Tokenizing itself is total and never fails; errors only arise at the
/// edges (theme files, I/O, mode lookup).
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("theme file is not valid TOML: {0}")]
    ThemeParse(#[from] toml::de::Error),

    #[error("unknown token kind in theme: {0}")]
    UnknownToken(String),

    #[error("unknown color name: {0}")]
    UnknownColor(String),

    #[error("no mode registered for: {0}")]
    UnknownMode(String),

    #[error("{0}")]
    Message(String),
}
