use tracing::trace;

use crate::chan::ChannelExt;
use crate::prefix::PrefixRef;

use super::tags::Tags;
use super::tokenizer;
use super::types::Message;

/// A borrowed view of an IRC line.
///
/// Every field is a slice of the input; the tag section is kept raw
/// (still escaped) until [`to_owned_message`](Self::to_owned_message).
#[derive(Clone, PartialEq, Debug)]
pub struct MessageRef<'a> {
    /// Raw tag section without the leading `@`.
    pub tags: Option<&'a str>,
    pub prefix: Option<PrefixRef<'a>>,
    pub command: &'a str,
    pub params: Vec<&'a str>,
    /// The trimmed input line.
    pub raw: &'a str,
}

impl<'a> MessageRef<'a> {
    /// Parse a line without allocating strings.
    ///
    /// Surrounding whitespace is trimmed. Returns `None` for a blank line or
    /// a line with no command.
    pub fn parse(s: &'a str) -> Option<MessageRef<'a>> {
        let line = s.trim();
        if line.is_empty() {
            trace!("ignoring blank line");
            return None;
        }

        let parsed = tokenizer::split(line)?;

        Some(MessageRef {
            tags: parsed.tags,
            prefix: parsed.prefix.map(PrefixRef::parse),
            command: parsed.command,
            params: parsed.params,
            raw: line,
        })
    }

    /// The last parameter, or an empty string if there are none.
    pub fn trailing(&self) -> &'a str {
        self.params.last().copied().unwrap_or("")
    }

    /// Whether the first parameter names a channel.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_channel(&self) -> bool {
        self.params.first().is_some_and(|p| p.has_channel_sigil())
    }

    /// Decode tags and copy every field into an owned [`Message`].
    pub fn to_owned_message(&self) -> Message {
        Message {
            tags: self.tags.map(Tags::parse).unwrap_or_default(),
            prefix: self
                .prefix
                .map(|p| p.to_prefix())
                .unwrap_or_default(),
            command: self.command.to_owned(),
            params: self.params.iter().map(|p| (*p).to_owned()).collect(),
        }
    }
}
