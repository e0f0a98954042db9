//! Channel name utilities.
//!
//! # Reference
//! - RFC 2812 Section 1.3: Channel names

/// Extension trait for recognising channel targets.
pub trait ChannelExt {
    /// Whether this string starts with a channel sigil (`#` or `&`).
    ///
    /// Only the first character is inspected; the rest of the name is not
    /// validated.
    fn has_channel_sigil(&self) -> bool;
}

impl ChannelExt for str {
    fn has_channel_sigil(&self) -> bool {
        matches!(self.chars().next(), Some('#' | '&'))
    }
}

impl ChannelExt for String {
    fn has_channel_sigil(&self) -> bool {
        self.as_str().has_channel_sigil()
    }
}
