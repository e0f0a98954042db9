//! # slirc-wire
//!
//! A lenient wire-format codec for IRC lines, with IRCv3 message tags.
//!
//! ## Features
//!
//! - One-line parsing into tags, prefix, command and parameters
//! - Exact re-serialization, including tag-value escaping
//! - Zero-copy parsing with borrowed message types
//! - Direct encoding to any `io::Write`
//! - Optional `serde` support
//!
//! Reading lines off a socket and dispatching on commands are left to the
//! caller; this crate only deals with a single line at a time.

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ### Parsing IRC Messages
//!
//! ```rust
//! use slirc_wire::Message;
//!
//! let raw = "@id=234AB;rose :dan!d@localhost PRIVMSG #chan :Hey there!";
//! let message = Message::parse(raw).expect("line has a command");
//!
//! assert_eq!(message.tag_value("id"), Some("234AB"));
//! assert_eq!(message.prefix.name, "dan");
//! assert_eq!(message.command, "PRIVMSG");
//! assert_eq!(message.trailing(), "Hey there!");
//! assert!(message.from_channel());
//!
//! // Blank lines and lines without a command are not messages.
//! assert!(Message::parse("").is_none());
//! assert!(Message::parse("@only=tags").is_none());
//! ```
//!
//! ### Creating IRC Messages
//!
//! ```rust
//! use slirc_wire::{Message, Prefix};
//!
//! let msg = Message::new("PRIVMSG", ["#dev", "Tagged message"])
//!     .with_tag("msgid", "abc123")
//!     .with_prefix(Prefix::parse("bot!bot@example.com"));
//!
//! assert_eq!(
//!     msg.to_string(),
//!     "@msgid=abc123 :bot!bot@example.com PRIVMSG #dev :Tagged message"
//! );
//! ```

pub mod chan;
pub mod encode;
pub mod error;
pub mod message;
pub mod prefix;

pub use self::chan::ChannelExt;
pub use self::encode::IrcEncode;
pub use self::error::MessageParseError;
pub use self::message::{Message, MessageRef, Tag, TagValue, Tags};
pub use self::prefix::{Identity, Prefix, PrefixRef};
