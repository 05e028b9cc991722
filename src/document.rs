use ordered_multimap::list_ordered_multimap::ListOrderedMultimap;
use std::io::BufRead;
use std::str::FromStr;

use crate::{parser, Error};

/// Key/value pairs of one scope, either global or a single section
#[derive(Clone, Debug, Default)]
pub struct Entries {
    pub(crate) data: ListOrderedMultimap<String, String>,
}

impl Entries {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Entries in the order they were read
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.data.keys_len()
    }

    pub(crate) fn insert(&mut self, key: String, value: String) {
        self.data.insert(key, value);
    }
}

/// A parsed INI file: keys before the first section plus all named sections.
///
/// Section names and keys within a scope are unique.
#[derive(Clone, Debug, Default)]
pub struct Document {
    pub(crate) global: Entries,
    pub(crate) sections: ListOrderedMultimap<String, Entries>,
}

impl Document {
    /// Creates a section. Returns `false` if it already exists.
    pub(crate) fn add_section(&mut self, name: &str) -> bool {
        if self.has_section(name) {
            return false;
        }
        self.sections.insert(name.to_owned(), Entries::default());
        true
    }

    pub(crate) fn entries_mut(&mut self, section: Option<&str>) -> &mut Entries {
        match section {
            None => &mut self.global,
            Some(name) => self
                .sections
                .entry(name.to_owned())
                .or_insert_entry(Entries::default())
                .into_mut(),
        }
    }

    /// Load from something readable
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        parser::Parser::new(reader).parse()
    }

    /// Looks up `key` in `section` or, with `None`, in the global scope
    pub fn get(&self, section: Option<&str>, key: &str) -> Option<&str> {
        match section {
            None => self.global.get(key),
            Some(name) => self.section(name)?.get(key),
        }
    }

    /// Keys that appear before the first section
    pub fn global(&self) -> &Entries {
        &self.global
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// `true` if there are no sections (there may still be global keys)
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.sections.keys_len()
    }

    pub fn new() -> Self {
        Document::default()
    }

    pub fn section(&self, name: &str) -> Option<&Entries> {
        self.sections.get(name)
    }

    /// Sections in the order they were declared
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Entries)> {
        self.sections.iter().map(|(name, e)| (name.as_str(), e))
    }
}

/// Same keys with the same values, in any order
impl PartialEq for Entries {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

/// Same global entries and same sections, in any order
impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.global == other.global
            && self.len() == other.len()
            && self
                .sections()
                .all(|(name, entries)| other.section(name) == Some(entries))
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Document::from_reader(s.as_bytes())
    }
}
