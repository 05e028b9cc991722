//! Strict reader for INI style configuration files.
//!
//! ```
//! let doc: ini_rs::Document = "[section] ; comments behind sections are no problem
//! ; comments for keys and values must be at the beginning of a line
//! key='value'
//! ".parse().unwrap();
//!
//! assert_eq!(doc.get(Some("section"), "key"), Some("value"));
//! ```

mod document;
mod error;
mod file;
mod parser;
mod value;

pub use self::document::{Document, Entries};
pub use self::error::{Error, ErrorKind, ParseError};
pub use self::file::read_file;
pub use self::parser::lexer::{Lexer, Token};
pub use self::value::Value;

use std::io::BufRead;

/// Reads a whole document. Nothing is returned on error.
pub fn parse<R: BufRead>(reader: R) -> Result<Document, Error> {
    Document::from_reader(reader)
}
