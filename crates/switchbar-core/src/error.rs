//! Core error types for switchbar-core
//!
//! Rendering and input handling never fail; errors only arise while
//! loading or validating style configuration.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or loading widget configuration.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A color string could not be understood.
    ///
    /// Accepted forms are named colors (`"blue"`), hex (`"#89b4fa"` or
    /// `"#8bf"`) and terminal palette indices (`"indexed:4"`).
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A style value is outside the range the widget accepts.
    #[error("invalid style: {0}")]
    InvalidStyle(String),

    /// Style or theme TOML was malformed.
    #[error("failed to parse style config: {0}")]
    StyleParse(#[from] toml::de::Error),

    /// Style or theme could not be written as TOML.
    #[error("failed to serialize style config: {0}")]
    StyleSerialize(#[from] toml::ser::Error),

    /// A style file could not be read from disk.
    #[error("failed to read style config at {path:?}: {source}")]
    StyleRead { path: PathBuf, source: io::Error },
}

/// Result type alias using [`CoreError`].
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_color_display() {
        let err = CoreError::InvalidColor("#12".to_string());
        assert_eq!(err.to_string(), "invalid color: #12");
    }

    #[test]
    fn test_invalid_style_display() {
        let err = CoreError::InvalidStyle("spacing 500 exceeds 64".to_string());
        assert_eq!(err.to_string(), "invalid style: spacing 500 exceeds 64");
    }

    #[test]
    fn test_style_read_display_mentions_path() {
        let err = CoreError::StyleRead {
            path: PathBuf::from("/nope/style.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        let text = err.to_string();
        assert!(text.contains("/nope/style.toml"));
        assert!(text.contains("missing"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CoreError>();
    }
}
