//! IRC message types, parsing and serialization.

mod borrowed;
mod parse;
mod serialize;
pub mod tags;
mod tokenizer;
mod types;

pub use self::borrowed::MessageRef;
pub use self::tags::{Tag, TagValue, Tags};
pub use self::types::Message;
