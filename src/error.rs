use thiserror::Error;

/// All errors produced by the glass generator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GlassError {
    /// Color picker value was not `#` followed by six hex digits.
    #[error("invalid hex color '{0}': expected '#' followed by 6 hex digits")]
    InvalidHex(String),
    /// Copy request named something other than `tailwind` or `css`.
    #[error("unknown copy target '{0}': expected 'tailwind' or 'css'")]
    UnknownCopyTarget(String),
    /// The host clipboard refused the write.
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, GlassError>;
