use chrono::{DateTime, SecondsFormat, Utc};

use crate::chan::ChannelExt;
use crate::prefix::Prefix;

use super::tags::{TagValue, Tags};

/// An owned IRC message.
///
/// Contains the complete parsed representation of an IRC line: IRCv3 tags,
/// the prefix/source, the command, and its parameters. The last parameter
/// is the trailing one and is the only one that may contain spaces or
/// start with `:`.
///
/// `clone()` is a deep copy: the tag map, prefix and parameter list are
/// all duplicated, so a clone can be handed to another owner and mutated
/// without affecting the original.
///
/// # Example
///
/// ```
/// use slirc_wire::Message;
///
/// // Parse a message
/// let msg = Message::parse(":nick!user@host PRIVMSG #channel :Hello!").unwrap();
/// assert_eq!(msg.trailing(), "Hello!");
///
/// // Construct a message
/// let msg = Message::new("PRIVMSG", ["#channel", "Hello there"]);
/// assert_eq!(msg.to_string(), "PRIVMSG #channel :Hello there");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// IRCv3 message tags (e.g., `time`, `msgid`). Empty if none were sent.
    pub tags: Tags,
    /// Message prefix/source. Its name is empty if none was sent.
    pub prefix: Prefix,
    /// The command name or numeric.
    pub command: String,
    /// Command parameters; the last one is the trailing parameter.
    pub params: Vec<String>,
}

impl Message {
    /// Create a message from a command and its parameters.
    pub fn new<C, I, P>(command: C, params: I) -> Self
    where
        C: Into<String>,
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Message {
            tags: Tags::new(),
            prefix: Prefix::default(),
            command: command.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// The message tags.
    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// The sender identity.
    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// The last parameter, or an empty string if there are none.
    pub fn trailing(&self) -> &str {
        self.params.last().map_or("", String::as_str)
    }

    /// Whether the first parameter names a channel (`#` or `&` sigil).
    ///
    /// Mostly useful for PRIVMSG and similar, to tell a channel message
    /// from a private one.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_channel(&self) -> bool {
        self.params.first().is_some_and(|p| p.has_channel_sigil())
    }

    /// Get the decoded value of an IRCv3 tag by key.
    pub fn tag_value(&self, key: &str) -> Option<&str> {
        self.tags.get(key)
    }

    /// Get the nickname from the message prefix, if present.
    pub fn source_nickname(&self) -> Option<&str> {
        self.prefix.nick()
    }

    /// The `time` tag (IRCv3 server-time), if present and valid RFC 3339.
    pub fn server_time(&self) -> Option<DateTime<Utc>> {
        self.tag_value("time")
            .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Set a single IRCv3 tag on this message
    #[must_use]
    pub fn with_tag<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<TagValue>,
    {
        self.tags.insert(key, value);
        self
    }

    /// Replace all tags on this message
    #[must_use]
    pub fn with_tags(mut self, tags: Tags) -> Self {
        self.tags = tags;
        self
    }

    /// Set the `time` tag in millisecond precision, e.g. `2023-01-01T12:00:00.000Z`.
    #[must_use]
    pub fn with_server_time(self, time: DateTime<Utc>) -> Self {
        self.with_tag("time", time.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    /// Set the prefix/source of this message
    #[must_use]
    pub fn with_prefix(mut self, prefix: Prefix) -> Self {
        self.prefix = prefix;
        self
    }

    /// Replace the parameters of this message
    #[must_use]
    pub fn with_params<I, P>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.params = params.into_iter().map(Into::into).collect();
        self
    }
}
