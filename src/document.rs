use std::io::BufRead;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::errors::{Result, SvgeqError};

/// Collect the `d` attribute of every `<path>` element in document order.
///
/// Only `<path>` elements are of interest; everything else in the document
/// (including nested groups and defs) is skipped without interpretation.
pub fn read_path_attrs(reader: &mut dyn BufRead) -> Result<Vec<String>> {
    let mut reader = Reader::from_reader(reader);
    let mut buf = Vec::new();
    let mut result = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e))
                if e.name().as_ref() == b"path" =>
            {
                for attr in e.attributes() {
                    let attr = attr.map_err(SvgeqError::from_err)?;
                    if attr.key.as_ref() == b"d" {
                        let value = attr.unescape_value().map_err(SvgeqError::from_err)?;
                        result.push(value.into_owned());
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(SvgeqError::DocumentError(e.to_string())),
        }
        buf.clear();
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(input: &str) -> Result<Vec<String>> {
        read_path_attrs(&mut Cursor::new(input.to_string()))
    }

    #[test]
    fn test_read_paths() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
            <path d="M0 0 L10 0"/>
            <g><path d="M0 0 C0 10 10 10 10 0" fill="none"/></g>
        </svg>"#;
        let paths = read(svg).unwrap();
        assert_eq!(paths, vec!["M0 0 L10 0", "M0 0 C0 10 10 10 10 0"]);
    }

    #[test]
    fn test_read_no_paths() {
        let svg = r#"<svg><rect width="10" height="10"/></svg>"#;
        assert!(read(svg).unwrap().is_empty());
    }

    #[test]
    fn test_read_path_without_d() {
        let svg = r#"<svg><path stroke="red"/></svg>"#;
        assert!(read(svg).unwrap().is_empty());
    }

    #[test]
    fn test_read_bad_document() {
        assert!(read("<svg><path ").is_err());
        assert!(read(r#"<svg><path d="M0 0"></svg>"#).is_err());
    }
}
