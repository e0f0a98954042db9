//! IRC message prefix types.
//!
//! A prefix identifies the origin of a message: a server name, a bare
//! nickname, or a full `nick!user@host` mask.
//!
//! # Reference
//! - RFC 2812 Section 2.3.1: Message format

use std::str::FromStr;

/// IRC message prefix - identifies the origin of a message.
///
/// Parsing is lenient and never fails. Missing parts are empty strings.
/// A server name lands in `name`, exactly like a bare nickname.
#[derive(Clone, Default, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prefix {
    /// Nickname or server name.
    pub name: String,
    /// Username (ident), empty if absent.
    pub user: String,
    /// Hostname, empty if absent.
    pub host: String,
}

/// The sender identity carried by a message prefix.
pub type Identity = Prefix;

impl Prefix {
    /// Create a prefix from its three parts.
    ///
    /// # Example
    ///
    /// ```
    /// use slirc_wire::Prefix;
    ///
    /// let prefix = Prefix::new("nick", "user", "host.example.com");
    /// assert_eq!(prefix.to_string(), "nick!user@host.example.com");
    /// ```
    pub fn new(name: impl Into<String>, user: impl Into<String>, host: impl Into<String>) -> Self {
        Prefix {
            name: name.into(),
            user: user.into(),
            host: host.into(),
        }
    }

    /// Parse a prefix token (without the leading `:`).
    ///
    /// ```
    /// use slirc_wire::Prefix;
    ///
    /// let p = Prefix::parse("nick!user@host");
    /// assert_eq!((&p.name[..], &p.user[..], &p.host[..]), ("nick", "user", "host"));
    /// ```
    pub fn parse(s: &str) -> Self {
        PrefixRef::parse(s).to_prefix()
    }

    /// Get the nickname (or server name), if non-empty.
    pub fn nick(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    /// Get the username, if non-empty.
    pub fn user(&self) -> Option<&str> {
        non_empty(&self.user)
    }

    /// Get the hostname, if non-empty.
    pub fn host(&self) -> Option<&str> {
        non_empty(&self.host)
    }

    /// A prefix with no name is not written to the wire.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

#[inline]
fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

impl FromStr for Prefix {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Prefix::parse(s))
    }
}

impl From<&str> for Prefix {
    fn from(s: &str) -> Self {
        Prefix::parse(s)
    }
}

/// A borrowed reference to a parsed prefix.
///
/// Used for zero-copy parsing of IRC messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrefixRef<'a> {
    /// Nickname or server name
    pub name: &'a str,
    /// Username (ident), empty if absent
    pub user: &'a str,
    /// Hostname, empty if absent
    pub host: &'a str,
    /// Original raw prefix string
    pub raw: &'a str,
}

impl<'a> PrefixRef<'a> {
    /// Split a prefix string into components without allocation.
    ///
    /// `@` is resolved before `!`, so a `!` inside the host stays there.
    /// A separator at index 0 is treated as ordinary content, which keeps
    /// the name from coming out empty.
    pub fn parse(s: &'a str) -> Self {
        let (name, host) = match s.find('@') {
            Some(at) if at > 0 => (&s[..at], &s[at + 1..]),
            _ => (s, ""),
        };

        let (name, user) = match name.find('!') {
            Some(bang) if bang > 0 => (&name[..bang], &name[bang + 1..]),
            _ => (name, ""),
        };

        Self {
            name,
            user,
            host,
            raw: s,
        }
    }

    /// Convert to an owned [`Prefix`].
    pub fn to_prefix(self) -> Prefix {
        Prefix::new(self.name, self.user, self.host)
    }
}
