use std::fmt::{self, Display, Formatter};

use crate::encode::needs_colon_prefix;

use super::types::Message;

/// Writes the exact wire form of the message, without a line terminator.
///
/// The tag section is omitted when there are no tags, and the prefix when
/// its name is empty. The last parameter gets a `:` marker when it would
/// otherwise not read back as a single parameter.
impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !self.tags.is_empty() {
            write!(f, "@{} ", self.tags)?;
        }

        if !self.prefix.is_empty() {
            write!(f, ":{} ", self.prefix)?;
        }

        f.write_str(&self.command)?;

        if let Some((trailing, middle)) = self.params.split_last() {
            for param in middle {
                write!(f, " {}", param)?;
            }

            if needs_colon_prefix(trailing) {
                f.write_str(" :")?;
            } else {
                f.write_str(" ")?;
            }
            f.write_str(trailing)?;
        }

        Ok(())
    }
}
