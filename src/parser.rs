pub mod lexer;

use log::{debug, trace};
use std::io::BufRead;

use self::lexer::{Lexer, Token};
use crate::{Document, Error, ErrorKind, ParseError, Value};

type ParseResult<T> = Result<T, Error>;

/// Drives a [`Lexer`] to the end of input and assembles a [`Document`].
#[derive(Debug)]
pub(crate) struct Parser<R> {
    lexer: Lexer<R>,
    document: Document,
    /// `None` until the first section header
    section: Option<String>,
    key: Option<String>,
}

impl<R: BufRead> Parser<R> {
    pub(crate) fn new(reader: R) -> Self {
        Parser {
            lexer: Lexer::new(reader),
            document: Document::new(),
            section: None,
            key: None,
        }
    }

    pub(crate) fn parse(mut self) -> ParseResult<Document> {
        while let Some(token) = self.lexer.next_token()? {
            trace!("line {}: {token:?}", self.lexer.line());

            match token {
                Token::Comment(_) => (),
                Token::Section(name) => self.enter_section(name)?,
                Token::Key(key) => self.expect_value_for(key)?,
                Token::Value(raw) => self.store_value(raw)?,
            }
        }

        debug!(
            "parsed {} global key(s) and {} section(s) from {} line(s)",
            self.document.global().len(),
            self.document.len(),
            self.lexer.line()
        );

        Ok(self.document)
    }

    fn enter_section(&mut self, name: String) -> ParseResult<()> {
        if !self.document.add_section(&name) {
            return Err(self.error(ErrorKind::DuplicateSection(name)));
        }
        self.section = Some(name);

        Ok(())
    }

    fn expect_value_for(&mut self, key: String) -> ParseResult<()> {
        let exists = match &self.section {
            None => self.document.global().has_key(&key),
            Some(section) => self
                .document
                .section(section)
                .is_some_and(|e| e.has_key(&key)),
        };
        if exists {
            return Err(self.error(ErrorKind::DuplicateKey {
                section: self.section.clone(),
                key,
            }));
        }
        self.key = Some(key);

        Ok(())
    }

    fn store_value(&mut self, raw: Value) -> ParseResult<()> {
        let value = raw.unquote().map_err(|kind| self.error(kind))?;

        // unreachable: the lexer emits a value only right after its key
        debug_assert!(self.key.is_some(), "value {raw:?} without a pending key");
        if let Some(key) = self.key.take() {
            self.document
                .entries_mut(self.section.as_deref())
                .insert(key, value.to_owned());
        }

        Ok(())
    }

    #[cold]
    fn error(&self, kind: ErrorKind) -> Error {
        Error::Parse(ParseError::new(self.lexer.line(), kind))
    }
}
