//! Message parsing implementation.
//!
//! [`Message::parse`] is the lenient entry point: anything that does not
//! yield a command is simply no message. `FromStr` wraps it for callers
//! who want to know why.

use std::str::FromStr;

use crate::error::MessageParseError;

use super::borrowed::MessageRef;
use super::types::Message;

impl Message {
    /// Parse one line into a message.
    ///
    /// Surrounding whitespace (including a CRLF terminator) is trimmed.
    /// Returns `None` for a blank line or when no command can be found,
    /// e.g. a line holding only tags and/or a prefix. Malformed tags never
    /// cause a failure; they decode on a best-effort basis.
    ///
    /// ```
    /// use slirc_wire::Message;
    ///
    /// let msg = Message::parse(":irc.example.com NOTICE * :*** Checking Ident").unwrap();
    /// assert_eq!(msg.prefix.name, "irc.example.com");
    /// assert_eq!(msg.command, "NOTICE");
    /// assert_eq!(msg.params, vec!["*", "*** Checking Ident"]);
    ///
    /// assert!(Message::parse("   ").is_none());
    /// ```
    pub fn parse(line: &str) -> Option<Message> {
        MessageRef::parse(line).map(|m| m.to_owned_message())
    }
}

impl FromStr for Message {
    type Err = MessageParseError;

    fn from_str(s: &str) -> Result<Message, Self::Err> {
        let line = s.trim();
        if line.is_empty() {
            return Err(MessageParseError::EmptyMessage);
        }

        Message::parse(line).ok_or_else(|| MessageParseError::MissingCommand {
            line: line.to_owned(),
        })
    }
}
