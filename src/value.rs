use std::fmt;

use crate::ErrorKind;

const QUOTE_SINGLE: char = '\'';
const QUOTE_DOUBLE: char = '"';

/// Raw text following a key, exactly as it appeared on the line.
///
/// Nothing inside a value is special to the lexer: comment characters and
/// quotes are kept verbatim. [`Value::unquote()`] turns it into the text that
/// ends up in a [`Document`](crate::Document).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Value(String);

impl Value {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn trim(&self) -> &str {
        self.0.trim()
    }

    /// Trims surrounding whitespace and strips one layer of quotes.
    ///
    /// Quotes are only stripped when the first closing quote is the last
    /// character of the trimmed text. There are no escape sequences.
    pub fn unquote(&self) -> Result<&str, ErrorKind> {
        let s = self.trim();

        let (quote, err) = match s.chars().next() {
            Some(QUOTE_SINGLE) => (QUOTE_SINGLE, ErrorKind::UnmatchedSingleQuote),
            Some(QUOTE_DOUBLE) => (QUOTE_DOUBLE, ErrorKind::UnmatchedDoubleQuote),
            _ => return Ok(s),
        };

        let inner = &s[quote.len_utf8()..];
        match inner.find(quote) {
            Some(end) if end + quote.len_utf8() == inner.len() => Ok(&inner[..end]),
            _ => Err(err),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod unquote {
        use super::*;

        #[test]
        fn empty_value_stays_empty() {
            assert_eq!(Value::from("").unquote(), Ok(""));
            assert_eq!(Value::from("   \t").unquote(), Ok(""));
        }

        #[test]
        fn unquoted_text_is_trimmed() {
            assert_eq!(Value::from(".").unquote(), Ok("."));
            assert_eq!(Value::from("   .").unquote(), Ok("."));
            assert_eq!(Value::from(" some value ").unquote(), Ok("some value"));
        }

        #[test]
        fn is_idempotent_on_unquoted_text() {
            for raw in ["..", "a b c", "x = y", "; not a comment"] {
                let once = Value::from(raw).unquote().unwrap().to_owned();
                assert_eq!(Value::from(once.as_str()).unquote(), Ok(once.as_str()));
            }
        }

        #[test]
        fn trailing_quotes_are_kept() {
            assert_eq!(Value::from(".'").unquote(), Ok(".'"));
            assert_eq!(Value::from(".\"").unquote(), Ok(".\""));
        }

        #[test]
        fn strips_single_quotes() {
            assert_eq!(Value::from("'h'").unquote(), Ok("h"));
            assert_eq!(Value::from("''").unquote(), Ok(""));
        }

        #[test]
        fn strips_double_quotes() {
            assert_eq!(Value::from("\"h\"").unquote(), Ok("h"));
            assert_eq!(Value::from("\"\"").unquote(), Ok(""));
        }

        #[test]
        fn keeps_whitespace_inside_quotes() {
            assert_eq!(Value::from(" \" h \" ").unquote(), Ok(" h "));
            assert_eq!(Value::from(" 'value' ").unquote(), Ok("value"));
        }

        #[test]
        fn does_not_process_escapes() {
            assert_eq!(Value::from("'a\\nb'").unquote(), Ok("a\\nb"));
        }

        #[test]
        fn keeps_other_quote_kind_inside() {
            assert_eq!(Value::from("\"it's\"").unquote(), Ok("it's"));
        }

        #[test]
        fn fails_with_lone_quote() {
            assert_eq!(
                Value::from("'").unquote(),
                Err(ErrorKind::UnmatchedSingleQuote)
            );
            assert_eq!(
                Value::from("\"").unquote(),
                Err(ErrorKind::UnmatchedDoubleQuote)
            );
        }

        #[test]
        fn fails_with_mismatched_quotes() {
            assert_eq!(
                Value::from("'\"").unquote(),
                Err(ErrorKind::UnmatchedSingleQuote)
            );
            assert_eq!(
                Value::from("\"'").unquote(),
                Err(ErrorKind::UnmatchedDoubleQuote)
            );
        }

        #[test]
        fn fails_with_text_after_closing_quote() {
            assert_eq!(
                Value::from("'a' b").unquote(),
                Err(ErrorKind::UnmatchedSingleQuote)
            );
            assert_eq!(
                Value::from("\"a\"b\"").unquote(),
                Err(ErrorKind::UnmatchedDoubleQuote)
            );
        }
    }
}
