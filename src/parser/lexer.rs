use std::fmt;
use std::io::{self, BufRead};

use crate::{Error, ErrorKind, ParseError, Value};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Token {
    /// `[name]`
    Section(String),
    /// text before `=`, trimmed
    Key(String),
    /// text after `=`, always following a `Key`
    Value(Value),
    /// text after `;` or `#`
    Comment(String),
}

impl Token {
    pub fn as_str(&self) -> &str {
        match self {
            Token::Section(s) | Token::Key(s) | Token::Comment(s) => s,
            Token::Value(v) => v.as_str(),
        }
    }

    /// Payload without surrounding whitespace, e.g. the text of `; comment `
    pub fn trim(&self) -> &str {
        self.as_str().trim()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    AwaitingLine,
    /// a `Key` was just emitted, the rest of its line is the value
    AwaitingValue,
}

/// Pulls lines from a reader and hands out one [`Token`] per call.
#[derive(Debug)]
pub struct Lexer<R> {
    lines: io::Lines<R>,
    buf: String,
    pos: usize,
    state: State,
    line: usize,
    halted: bool,
}

impl<R: BufRead> Lexer<R> {
    pub fn new(reader: R) -> Self {
        Lexer {
            lines: reader.lines(),
            buf: String::new(),
            pos: 0,
            state: State::AwaitingLine,
            line: 0,
            halted: false,
        }
    }

    /// 1-based number of the line currently being tokenized (0 before the first read)
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the next token or `None` at the end of input.
    ///
    /// Errors are final: once one was returned the lexer only reports the end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        if self.halted {
            return Ok(None);
        }

        let token = self.scan();
        if token.is_err() {
            self.halted = true;
            self.clear();
        }
        token
    }

    fn scan(&mut self) -> Result<Option<Token>, Error> {
        if self.state == State::AwaitingValue {
            // whatever is left, even nothing at the end of a line or input
            let value = Value::from(self.rest());
            self.clear();
            self.state = State::AwaitingLine;
            return Ok(Some(Token::Value(value)));
        }

        if self.rest().is_empty() && !self.fill()? {
            return Ok(None);
        }

        let rest = self.rest();
        let first = match rest.chars().next() {
            Some(c) => c,
            None => return Ok(None),
        };

        let token = match first {
            ';' | '#' => {
                let comment = rest[first.len_utf8()..].to_owned();
                self.clear();
                Token::Comment(comment)
            }
            '[' => {
                let after_start = &rest[1..];
                let end = match after_start.find(']') {
                    Some(end) => end,
                    None => return Err(self.error(ErrorKind::MissingSectionDelimiter)),
                };
                let name = after_start[..end].to_owned();

                // sections and entries may share a line
                let remainder = &after_start[end + 1..];
                let skipped = remainder.len() - remainder.trim_start().len();
                self.pos += 1 + end + 1 + skipped;

                Token::Section(name)
            }
            '=' => return Err(self.error(ErrorKind::MissingKey)),
            _ => {
                let sep = match rest.find('=') {
                    Some(sep) => sep,
                    None => return Err(self.error(ErrorKind::ValueWithoutKey)),
                };
                let key = rest[..sep].trim().to_owned();
                self.pos += sep + 1;
                self.state = State::AwaitingValue;

                Token::Key(key)
            }
        };

        Ok(Some(token))
    }

    /// Loads the next non-blank line, left-trimmed. `false` at the end of input.
    fn fill(&mut self) -> io::Result<bool> {
        for line in self.lines.by_ref() {
            let line = line?;
            self.line += 1;

            let indent = line.len() - line.trim_start().len();
            if indent < line.len() {
                self.buf = line;
                self.pos = indent;
                return Ok(true);
            }
        }

        self.clear();
        Ok(false)
    }

    fn rest(&self) -> &str {
        &self.buf[self.pos..]
    }

    fn clear(&mut self) {
        self.buf.clear();
        self.pos = 0;
    }

    #[cold]
    fn error(&self, kind: ErrorKind) -> Error {
        Error::Parse(ParseError::new(self.line, kind))
    }
}

impl<R: BufRead> Iterator for Lexer<R> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
