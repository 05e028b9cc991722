use std::io;

/// What went wrong while reading an INI document.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("missing section delimiter, a closing \"]\"")]
    MissingSectionDelimiter,
    #[error("missing key, found bare \"=\" instead")]
    MissingKey,
    #[error("found bare value without key")]
    ValueWithoutKey,
    #[error("unmatched single quote")]
    UnmatchedSingleQuote,
    #[error("unmatched double quote")]
    UnmatchedDoubleQuote,
    #[error("duplicate section {0:?}")]
    DuplicateSection(String),
    #[error("{}", duplicate_key_message(.section, .key))]
    DuplicateKey {
        /// `None` for the global scope
        section: Option<String>,
        key: String,
    },
}

fn duplicate_key_message(section: &Option<String>, key: &str) -> String {
    match section {
        None => format!("duplicate global key {key:?}"),
        Some(section) => format!("duplicate key {key:?} in section {section:?}"),
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{line}: {kind}")]
pub struct ParseError {
    pub(crate) line: usize,
    pub(crate) kind: ErrorKind,
}

impl ParseError {
    pub(crate) fn new(line: usize, kind: ErrorKind) -> Self {
        ParseError { line, kind }
    }

    /// 1-based line the error was detected on
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// The parse error kind, `None` for I/O errors
    pub fn kind(&self) -> Option<&ErrorKind> {
        match self {
            Error::Io(_) => None,
            Error::Parse(e) => Some(e.kind()),
        }
    }
}
