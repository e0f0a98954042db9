//! IRCv3 message tags: value escaping and the ordered tag map.
//!
//! Tag values only ever exist escaped on the wire. In memory they are held
//! decoded as [`TagValue`], and the [`Tags`] collection keeps the order in
//! which keys were first seen so serialized output is reproducible.

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter, Result as FmtResult, Write};
use std::io::{self, Write as IoWrite};
use std::ops::Deref;

/// Escapes valid inside a tag value, as `(decoded, escape letter)` pairs.
///
/// `\:` is `;`, `\s` is a space, `\\` is a backslash, `\r` and `\n` are CR and LF.
const TAG_ESCAPES: [(char, char); 5] = [
    (';', ':'),
    (' ', 's'),
    ('\\', '\\'),
    ('\r', 'r'),
    ('\n', 'n'),
];

#[inline]
fn escape_letter(c: char) -> Option<char> {
    TAG_ESCAPES
        .iter()
        .find(|&&(raw, _)| raw == c)
        .map(|&(_, letter)| letter)
}

#[inline]
fn unescaped_char(letter: char) -> Option<char> {
    TAG_ESCAPES
        .iter()
        .find(|&&(_, l)| l == letter)
        .map(|&(raw, _)| raw)
}

/// Escape a tag value for serialization.
///
/// Every reserved character is replaced by its two-character escape; all
/// other characters pass through unchanged.
pub fn escape_tag_value(f: &mut dyn Write, value: &str) -> FmtResult {
    for c in value.chars() {
        match escape_letter(c) {
            Some(letter) => {
                f.write_char('\\')?;
                f.write_char(letter)?;
            }
            None => f.write_char(c)?,
        }
    }
    Ok(())
}

/// Escape a tag value directly to an `io::Write` implementor.
///
/// Used by the [`IrcEncode`](crate::encode::IrcEncode) trait.
pub fn escape_tag_value_to_writer<W: IoWrite>(w: &mut W, value: &str) -> io::Result<usize> {
    let mut written = 0;
    let mut buf = [0u8; 4];
    for c in value.chars() {
        let bytes = match escape_letter(c) {
            Some(letter) => {
                buf[0] = b'\\';
                let n = letter.encode_utf8(&mut buf[1..]).len();
                &buf[..1 + n]
            }
            None => c.encode_utf8(&mut buf).as_bytes(),
        };
        w.write_all(bytes)?;
        written += bytes.len();
    }
    Ok(written)
}

/// Unescape a tag value from wire format.
///
/// Reverses [`escape_tag_value`]. Malformed escapes are kept rather than
/// rejected: a backslash followed by an unknown character yields both
/// characters, and a lone trailing backslash is kept as-is.
pub fn unescape_tag_value(value: &str) -> String {
    let mut unescaped = String::with_capacity(value.len());
    let mut iter = value.chars();
    while let Some(c) = iter.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }
        match iter.next() {
            Some(next) => match unescaped_char(next) {
                Some(r) => unescaped.push(r),
                None => {
                    unescaped.push('\\');
                    unescaped.push(next);
                }
            },
            None => unescaped.push('\\'),
        }
    }
    unescaped
}

/// A decoded tag value.
///
/// Set it from plain text; escaping is applied when the value is written
/// to the wire.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TagValue(String);

impl TagValue {
    /// Decode a value exactly as it appeared on the wire.
    pub fn parse(raw: &str) -> Self {
        TagValue(unescape_tag_value(raw))
    }

    /// The wire (escaped) form of this value.
    pub fn encode(&self) -> String {
        let mut out = String::with_capacity(self.0.len());
        // Writing to a String cannot fail.
        let _ = escape_tag_value(&mut out, &self.0);
        out
    }

    /// The decoded value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the value, returning the decoded string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for TagValue {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl From<String> for TagValue {
    fn from(value: String) -> Self {
        TagValue(value)
    }
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        TagValue(value.to_owned())
    }
}

impl PartialEq<str> for TagValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TagValue {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Display for TagValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single IRCv3 message tag.
///
/// A tag sent without `=` has an empty value.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag(
    /// Tag key (e.g., `time`, `msgid`).
    pub String,
    /// Decoded tag value.
    pub TagValue,
);

impl Tag {
    /// Create a new tag from a key and a decoded value.
    pub fn new(key: impl Into<String>, value: impl Into<TagValue>) -> Self {
        Tag(key.into(), value.into())
    }

    /// The tag key.
    pub fn key(&self) -> &str {
        &self.0
    }

    /// The decoded tag value.
    pub fn value(&self) -> &str {
        &self.1
    }
}

/// The tag section of a message, keyed by tag name.
///
/// Keys are unique. Iteration and serialization follow the order in which
/// each key was first inserted; re-inserting a key replaces its value in
/// place. Equality ignores order.
///
/// Lookups and inserts go through a key index, so parsing a tag section is
/// linear in its length.
#[derive(Clone, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<Tag>", into = "Vec<Tag>"))]
pub struct Tags {
    entries: Vec<Tag>,
    /// Key -> position in `entries`.
    index: HashMap<String, usize>,
}

impl Tags {
    /// Create an empty tag map.
    pub fn new() -> Self {
        Tags::default()
    }

    /// Parse the tag section of a line (without the leading `@`).
    ///
    /// Never fails. A piece without `=` becomes a key with an empty value,
    /// and a duplicated key keeps the value of its last occurrence.
    pub fn parse(segment: &str) -> Self {
        let mut tags = Tags::new();
        for piece in segment.split(';') {
            match piece.split_once('=') {
                Some((key, raw)) => tags.insert(key, TagValue::parse(raw)),
                None => tags.insert(piece, TagValue::default()),
            }
        }
        tags
    }

    /// Look up a tag's decoded value.
    ///
    /// A tag that was present without a value yields `Some("")`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&idx| self.entries[idx].value())
    }

    /// Whether a tag with this key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Set a tag, replacing the value of an existing key in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<TagValue>) {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&idx) => self.entries[idx].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(Tag(key, value));
            }
        }
    }

    /// Remove a tag, returning its value if it was present.
    ///
    /// Later tags shift down one position, so this is linear in the number
    /// of tags.
    pub fn remove(&mut self, key: &str) -> Option<TagValue> {
        let idx = self.index.remove(key)?;
        let Tag(_, value) = self.entries.remove(idx);
        for slot in self.index.values_mut() {
            if *slot > idx {
                *slot -= 1;
            }
        }
        Some(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.entries.iter()
    }
}

impl PartialEq for Tags {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|Tag(k, v)| other.get(k) == Some(v.as_str()))
    }
}

impl Eq for Tags {}

impl<K, V> FromIterator<(K, V)> for Tags
where
    K: Into<String>,
    V: Into<TagValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tags = Tags::new();
        for (k, v) in iter {
            tags.insert(k, v);
        }
        tags
    }
}

impl From<Vec<Tag>> for Tags {
    fn from(entries: Vec<Tag>) -> Self {
        entries.into_iter().map(|Tag(k, v)| (k, v)).collect()
    }
}

impl From<Tags> for Vec<Tag> {
    fn from(tags: Tags) -> Self {
        tags.entries
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Writes the tag section without the leading `@`.
///
/// Tags with an empty value are written as a bare key.
impl Display for Tags {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, Tag(key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_char(';')?;
            }
            f.write_str(key)?;
            if !value.is_empty() {
                f.write_char('=')?;
                escape_tag_value(f, value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_table() {
        assert_eq!(unescape_tag_value("a\\:b"), "a;b");
        assert_eq!(unescape_tag_value("hello\\sworld"), "hello world");
        assert_eq!(unescape_tag_value("path\\\\file"), "path\\file");
        assert_eq!(unescape_tag_value("line\\rend"), "line\rend");
        assert_eq!(unescape_tag_value("line\\nend"), "line\nend");
    }

    #[test]
    fn test_unescape_combined() {
        let input = "a\\:b\\sc\\\\d\\re\\nf";
        let expected = "a;b c\\d\re\nf";
        assert_eq!(unescape_tag_value(input), expected);
    }

    #[test]
    fn test_unescape_trailing_backslash_kept() {
        assert_eq!(unescape_tag_value("test\\"), "test\\");
        assert_eq!(unescape_tag_value("\\"), "\\");
    }

    #[test]
    fn test_unescape_unknown_escape_passes_through() {
        assert_eq!(unescape_tag_value("a\\xb"), "a\\xb");
        // The character after an unknown escape is not itself an escape.
        assert_eq!(unescape_tag_value("\\x\\s"), "\\x ");
    }

    #[test]
    fn test_escape_table() {
        let value: TagValue = "a;b c\\d\re\nf".into();
        assert_eq!(value.encode(), "a\\:b\\sc\\\\d\\re\\nf");
        assert_eq!(TagValue::from("plain-value").encode(), "plain-value");
    }

    #[test]
    fn test_escape_roundtrip() {
        let test_values = vec![
            "",
            "simple",
            "with space",
            "with;semicolon",
            "with\\backslash",
            "trailing\\",
            "with\nnewline",
            "with\rcarriage",
            "complex; \\ \n \r all",
            "ünïcödé ☃",
        ];

        for original in test_values {
            let escaped = TagValue::from(original).encode();
            let unescaped = TagValue::parse(&escaped);
            assert_eq!(
                unescaped, original,
                "Roundtrip failed: '{}' -> '{}' -> '{}'",
                original, escaped, unescaped
            );
        }
    }

    #[test]
    fn test_escape_to_writer_matches_fmt() {
        let value = "semi;colon space\\slash\r\n☃";
        let mut fmt_out = String::new();
        escape_tag_value(&mut fmt_out, value).unwrap();

        let mut io_out = Vec::new();
        let written = escape_tag_value_to_writer(&mut io_out, value).unwrap();
        assert_eq!(written, io_out.len());
        assert_eq!(String::from_utf8(io_out).unwrap(), fmt_out);
    }

    #[test]
    fn test_parse_tags() {
        let tags = Tags::parse("id=234AB;rose");
        assert_eq!(tags.len(), 2);
        assert_eq!(tags.get("id"), Some("234AB"));
        assert_eq!(tags.get("rose"), Some(""));
        assert_eq!(tags.get("missing"), None);
        assert!(tags.contains_key("rose"));
    }

    #[test]
    fn test_parse_tags_splits_on_first_equals() {
        let tags = Tags::parse("k=a=b");
        assert_eq!(tags.get("k"), Some("a=b"));
    }

    #[test]
    fn test_parse_tags_decodes_values() {
        let tags = Tags::parse("msg=hello\\sworld\\:;+draft/x=a\\\\b");
        assert_eq!(tags.get("msg"), Some("hello world;"));
        assert_eq!(tags.get("+draft/x"), Some("a\\b"));
    }

    #[test]
    fn test_parse_tags_duplicate_last_wins() {
        let tags = Tags::parse("a=1;b=2;a=3");
        assert_eq!(tags.len(), 2);
        assert_eq!(tags.get("a"), Some("3"));
        let keys: Vec<_> = tags.iter().map(Tag::key).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_empty_segment() {
        let tags = Tags::parse("");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags.get(""), Some(""));
    }

    #[test]
    fn test_display_preserves_insertion_order() {
        let mut tags = Tags::new();
        tags.insert("time", "2023-01-01T00:00:00Z");
        tags.insert("flag", "");
        tags.insert("text", "hi there");
        assert_eq!(tags.to_string(), "time=2023-01-01T00:00:00Z;flag;text=hi\\sthere");
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut tags: Tags = [("a", "1"), ("b", "2")].into_iter().collect();
        tags.insert("a", "9");
        assert_eq!(tags.to_string(), "a=9;b=2");
    }

    #[test]
    fn test_remove() {
        let mut tags = Tags::parse("a=1;b");
        assert_eq!(tags.remove("a"), Some(TagValue::from("1")));
        assert_eq!(tags.remove("a"), None);
        assert_eq!(tags.to_string(), "b");
    }

    #[test]
    fn test_remove_keeps_later_lookups() {
        let mut tags = Tags::parse("a=1;b=2;c=3;d=4");
        tags.remove("b");
        assert_eq!(tags.get("c"), Some("3"));
        assert_eq!(tags.get("d"), Some("4"));
        tags.insert("c", "9");
        tags.insert("e", "5");
        assert_eq!(tags.to_string(), "a=1;c=9;d=4;e=5");
    }

    #[test]
    fn test_parse_large_tag_section() {
        let count = 50_000;
        let segment = (0..count)
            .map(|i| format!("k{i}=v{i}"))
            .collect::<Vec<_>>()
            .join(";");

        let tags = Tags::parse(&segment);
        assert_eq!(tags.len(), count);
        assert_eq!(tags.get("k0"), Some("v0"));
        assert_eq!(tags.get("k49999"), Some("v49999"));
        assert_eq!(tags.iter().nth(1234).map(Tag::key), Some("k1234"));
        assert_eq!(tags.to_string(), segment);
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = Tags::parse("x=1;y=2;z");
        let b = Tags::parse("z;y=2;x=1");
        assert_eq!(a, b);
        assert_ne!(a, Tags::parse("x=1;y=3;z"));
        assert_ne!(a, Tags::parse("x=1;y=2"));
    }
}
