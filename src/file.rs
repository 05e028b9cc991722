use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{Document, Error};

/// Opens and parses the file at `path`
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Document, Error> {
    let path = path.as_ref();
    debug!("Loading ini file {path:?}");

    let file = File::open(path)?;
    Document::from_reader(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use std::fs;
    use std::io;

    mod read_file {
        use super::*;

        #[test]
        fn reads_sections_and_keys() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("test.ini");
            fs::write(&path, "name=test\n[server]\nhost = \"localhost\"\nport=8080\n").unwrap();

            let doc = read_file(&path).unwrap();

            assert_eq!(doc.get(None, "name"), Some("test"));
            assert_eq!(doc.get(Some("server"), "host"), Some("localhost"));
            assert_eq!(doc.get(Some("server"), "port"), Some("8080"));
        }

        #[test]
        fn fails_with_missing_file() {
            let dir = tempfile::tempdir().unwrap();

            match read_file(dir.path().join("missing.ini")) {
                Err(Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
                other => panic!("expected an I/O error, got {other:?}"),
            }
        }

        #[test]
        fn fails_with_parse_error() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("broken.ini");
            fs::write(&path, "[a]\n[a]\n").unwrap();

            let err = read_file(&path).unwrap_err();

            assert_eq!(err.kind(), Some(&ErrorKind::DuplicateSection("a".into())));
        }
    }
}
