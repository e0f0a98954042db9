//! Line tokenizer.
//!
//! Splits a trimmed IRC line into whitespace-delimited tokens with nom,
//! tracking how many leading special segments (`@tags`, `:prefix`) have been
//! consumed. Once past those, a token starting with `:` swallows the rest of
//! the line as the trailing parameter.

use nom::{
    bytes::complete::{take_till1, take_while1},
    IResult,
};
use tracing::trace;

/// Parser position relative to the leading special segments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum State {
    Initial,
    FoundTags,
    FoundPrefix,
    Other,
}

/// One whitespace-free token.
fn word(input: &str) -> IResult<&str, &str> {
    take_till1(char::is_whitespace)(input)
}

/// A run of whitespace between tokens.
fn gap(input: &str) -> IResult<&str, &str> {
    take_while1(char::is_whitespace)(input)
}

/// Tokenize a line into raw tokens.
///
/// The tags and prefix tokens keep their `@` / `:` markers. A trailing
/// parameter is returned without its colon and may contain whitespace.
/// Runs of whitespace collapse, so no empty tokens are produced except for
/// an empty trailing parameter.
pub(crate) fn tokenize(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut state = State::Initial;
    let mut rest = line.trim_start();

    while !rest.is_empty() {
        state = if state == State::Initial && rest.starts_with('@') {
            State::FoundTags
        } else if state <= State::FoundTags && rest.starts_with(':') {
            State::FoundPrefix
        } else if let Some(trailing) = rest.strip_prefix(':') {
            tokens.push(trailing);
            break;
        } else {
            State::Other
        };

        let (after, token) = match word(rest) {
            Ok(parsed) => parsed,
            Err(_) => break,
        };
        tokens.push(token);

        rest = match gap(after) {
            Ok((next, _)) => next,
            Err(_) => break,
        };
    }

    tokens
}

/// Borrowed pieces of a line after the leading segments are split off.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RawMessage<'a> {
    /// Tag section without the `@`.
    pub tags: Option<&'a str>,
    /// Prefix without the `:`.
    pub prefix: Option<&'a str>,
    pub command: &'a str,
    pub params: Vec<&'a str>,
}

/// Tokenize a trimmed line and separate tags, prefix, command and params.
///
/// Returns `None` when no non-empty command remains.
pub(crate) fn split(line: &str) -> Option<RawMessage<'_>> {
    let tokens = tokenize(line);
    let mut rest = tokens.as_slice();

    let mut tags = None;
    if let Some((&first, tail)) = rest.split_first() {
        if let Some(raw) = first.strip_prefix('@') {
            tags = Some(raw);
            rest = tail;
        }
    }

    let mut prefix = None;
    if let Some((&first, tail)) = rest.split_first() {
        if let Some(raw) = first.strip_prefix(':') {
            prefix = Some(raw);
            rest = tail;
        }
    }

    match rest.split_first() {
        Some((&command, params)) if !command.is_empty() => Some(RawMessage {
            tags,
            prefix,
            command,
            params: params.to_vec(),
        }),
        _ => {
            trace!(line, "no command in line");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_bare_command() {
        assert_eq!(tokenize("PING"), vec!["PING"]);
    }

    #[test]
    fn test_tokenize_middle_params() {
        assert_eq!(tokenize("MODE #chan +o nick"), vec!["MODE", "#chan", "+o", "nick"]);
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        assert_eq!(tokenize("JOIN   #a \t #b"), vec!["JOIN", "#a", "#b"]);
    }

    #[test]
    fn test_tokenize_trailing_keeps_spaces() {
        assert_eq!(
            tokenize("PRIVMSG #chan :hello  there :)"),
            vec!["PRIVMSG", "#chan", "hello  there :)"]
        );
    }

    #[test]
    fn test_tokenize_tags_and_prefix_are_plain_tokens() {
        assert_eq!(
            tokenize("@a=b;c :nick!u@h PRIVMSG #x :hi there"),
            vec!["@a=b;c", ":nick!u@h", "PRIVMSG", "#x", "hi there"]
        );
    }

    #[test]
    fn test_tokenize_colon_after_prefix_is_trailing() {
        assert_eq!(tokenize(":server :rest of line"), vec![":server", "rest of line"]);
    }

    #[test]
    fn test_tokenize_at_after_start_is_ordinary() {
        assert_eq!(tokenize("CMD @notags"), vec!["CMD", "@notags"]);
        assert_eq!(tokenize(":p @x"), vec![":p", "@x"]);
    }

    #[test]
    fn test_tokenize_empty_trailing() {
        assert_eq!(tokenize("PRIVMSG #chan :"), vec!["PRIVMSG", "#chan", ""]);
    }

    #[test]
    fn test_tokenize_unicode_whitespace() {
        assert_eq!(tokenize("A\u{3000}B"), vec!["A", "B"]);
    }

    #[test]
    fn test_split_full_line() {
        let raw = split("@id=1 :n!u@h PRIVMSG #c :Hey!").unwrap();
        assert_eq!(raw.tags, Some("id=1"));
        assert_eq!(raw.prefix, Some("n!u@h"));
        assert_eq!(raw.command, "PRIVMSG");
        assert_eq!(raw.params, vec!["#c", "Hey!"]);
    }

    #[test]
    fn test_split_without_command() {
        assert_eq!(split("@a=b"), None);
        assert_eq!(split(":prefix"), None);
        assert_eq!(split("@a=b :prefix"), None);
        assert_eq!(split(":"), None);
        assert_eq!(split(""), None);
    }

    #[test]
    fn test_split_empty_command_token() {
        // The trailing capture after a prefix yields an empty command.
        assert_eq!(split(":prefix :"), None);
    }

    #[test]
    fn test_split_trailing_after_prefix_becomes_command() {
        let raw = split(":a :b c").unwrap();
        assert_eq!(raw.prefix, Some("a"));
        assert_eq!(raw.command, "b c");
        assert!(raw.params.is_empty());
    }
}
