//! Error types for the IRC wire codec.
//!
//! Parsing is lenient: tags and prefixes never fail, and
//! [`Message::parse`](crate::Message::parse) reports a line without a
//! command as `None`. These errors are only produced by the `FromStr`
//! implementation, for callers who want a reason.

use thiserror::Error;

/// Convenience type alias for Results using [`MessageParseError`].
pub type Result<T, E = MessageParseError> = std::result::Result<T, E>;

/// Errors encountered when parsing IRC messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MessageParseError {
    /// The line was empty or only whitespace.
    #[error("empty message")]
    EmptyMessage,

    /// The line held only tags and/or a prefix, or an empty command.
    #[error("no command in message: {line}")]
    MissingCommand {
        /// The trimmed line.
        line: String,
    },
}
