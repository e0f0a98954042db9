//! Zero-copy encoding for IRC messages.
//!
//! This module provides the [`IrcEncode`] trait for writing IRC messages directly
//! to byte buffers without intermediate `String` allocations.
//!
//! The bytes written are exactly what `Display` produces. No line terminator
//! is appended; framing belongs to the transport.
//!
//! # Example
//!
//! ```
//! use slirc_wire::encode::IrcEncode;
//! use slirc_wire::Message;
//!
//! let msg = Message::new("PRIVMSG", ["#channel", "Hello!"]);
//! let mut buf = Vec::new();
//! msg.encode(&mut buf).unwrap();
//!
//! assert_eq!(&buf, b"PRIVMSG #channel Hello!");
//! ```

use std::io::{self, Write};

use crate::message::tags::escape_tag_value_to_writer;
use crate::message::{Message, Tag, Tags};
use crate::prefix::Prefix;

/// A trait for encoding IRC protocol elements directly to a byte stream.
///
/// # Implementors
///
/// - [`Message`] - Owned IRC message
/// - [`Prefix`] - Message source/prefix
/// - [`Tags`] - Tag section (without the leading `@`)
pub trait IrcEncode {
    /// Encode this value to the given writer.
    ///
    /// Returns the number of bytes written on success.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the write fails.
    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<usize>;

    /// Encode this value to a new `Vec<u8>`.
    #[must_use]
    fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(512); // IRC max line length
        // Writing to a Vec cannot fail.
        let _ = self.encode(&mut buf);
        buf
    }
}

/// Check if a string needs colon-prefixing as a trailing IRC argument.
///
/// Any whitespace counts, since the tokenizer splits on all of it.
#[inline]
pub(crate) fn needs_colon_prefix(s: &str) -> bool {
    s.is_empty() || s.contains(char::is_whitespace) || s.starts_with(':')
}

#[inline]
fn put<W: Write>(w: &mut W, bytes: &[u8]) -> io::Result<usize> {
    w.write_all(bytes)?;
    Ok(bytes.len())
}

/// Write a command with arguments. The last argument gets a `:` prefix if needed.
fn write_cmd<W: Write>(w: &mut W, cmd: &str, args: &[String]) -> io::Result<usize> {
    let mut written = put(w, cmd.as_bytes())?;

    let Some((trailing, middle)) = args.split_last() else {
        return Ok(written);
    };

    for param in middle {
        written += put(w, b" ")?;
        written += put(w, param.as_bytes())?;
    }

    written += put(w, b" ")?;

    if needs_colon_prefix(trailing) {
        written += put(w, b":")?;
    }

    written += put(w, trailing.as_bytes())?;
    Ok(written)
}

impl IrcEncode for Message {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<usize> {
        let mut written = 0;

        if !self.tags.is_empty() {
            written += put(w, b"@")?;
            written += self.tags.encode(w)?;
            written += put(w, b" ")?;
        }

        if !self.prefix.is_empty() {
            written += put(w, b":")?;
            written += self.prefix.encode(w)?;
            written += put(w, b" ")?;
        }

        written += write_cmd(w, &self.command, &self.params)?;
        Ok(written)
    }
}

impl IrcEncode for Tags {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<usize> {
        let mut written = 0;
        for (i, Tag(key, value)) in self.iter().enumerate() {
            if i > 0 {
                written += put(w, b";")?;
            }
            written += put(w, key.as_bytes())?;
            if !value.is_empty() {
                written += put(w, b"=")?;
                written += escape_tag_value_to_writer(w, value)?;
            }
        }
        Ok(written)
    }
}

impl IrcEncode for Prefix {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<usize> {
        let mut written = put(w, self.name.as_bytes())?;

        if !self.user.is_empty() {
            written += put(w, b"!")?;
            written += put(w, self.user.as_bytes())?;
        }

        if !self.host.is_empty() {
            written += put(w, b"@")?;
            written += put(w, self.host.as_bytes())?;
        }

        Ok(written)
    }
}
