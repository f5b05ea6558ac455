//! Error types for reply construction.

/// Result type alias for reply construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Reply validation error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Code does not match the SMTP reply-code grammar.
    #[error("Invalid SMTP reply code {0}: must be three digits with first digit 2-5")]
    InvalidReplyCode(u16),

    /// Text contains a carriage return or line feed.
    #[error("Reply text contains a line terminator: {0:?}")]
    InvalidReplyText(&'static str),
}
