#![forbid(unsafe_code)]

//! Owned XML document text over roxmltree.

use sorteringen_core::Error;
use std::path::Path;

/// An owned XML document.
///
/// To work with the parsed tree, call [`XmlDocument::parse_doc`] which
/// returns a temporary `roxmltree::Document` borrowing from the text.
pub struct XmlDocument {
    text: String,
}

impl XmlDocument {
    /// Parse and validate XML from a string, taking ownership.
    pub fn parse(text: String) -> Result<Self, Error> {
        roxmltree::Document::parse_with_options(&text, crate::parsing_options())
            .map_err(|e| Error::XmlParse(e.to_string()))?;
        Ok(Self { text })
    }

    /// Parse and validate XML from bytes.
    pub fn parse_bytes(data: &[u8]) -> Result<Self, Error> {
        let text = std::str::from_utf8(data)
            .map_err(|e| Error::XmlParse(format!("invalid UTF-8: {e}")))?
            .to_owned();
        Self::parse(text)
    }

    /// Read and validate an XML file.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let data = std::fs::read(path)
            .map_err(|e| Error::io(path.display().to_string(), e))?;
        Self::parse_bytes(&data)
    }

    /// Get the raw XML text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parse the document and return a temporary `roxmltree::Document`.
    ///
    /// This re-parses the stored text. Call it once per pass and hand the
    /// resulting document down.
    pub fn parse_doc(&self) -> Result<roxmltree::Document<'_>, Error> {
        roxmltree::Document::parse_with_options(&self.text, crate::parsing_options())
            .map_err(|e| Error::XmlParse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let doc = XmlDocument::parse("<root a=\"1\"/>".to_owned()).unwrap();
        assert_eq!(doc.text(), "<root a=\"1\"/>");
        let parsed = doc.parse_doc().unwrap();
        assert_eq!(parsed.root_element().tag_name().name(), "root");
    }

    #[test]
    fn test_parse_malformed() {
        let err = XmlDocument::parse("<root><child></root>".to_owned()).err().unwrap();
        assert!(matches!(err, Error::XmlParse(_)));
    }

    #[test]
    fn test_parse_bytes_invalid_utf8() {
        let err = XmlDocument::parse_bytes(&[0xFF, 0xFE]).err().unwrap();
        assert!(err.to_string().contains("invalid UTF-8"));
    }

    #[test]
    fn test_from_file_missing() {
        let path = Path::new("no-such-dir/missing.xml");
        let err = XmlDocument::from_file(path).err().unwrap();
        match &err {
            Error::Io { target, source } => {
                assert_eq!(target, "no-such-dir/missing.xml");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().starts_with("no-such-dir/missing.xml: "));
    }

    #[test]
    fn test_dtd_allowed() {
        let xml = "<!DOCTYPE root [<!ENTITY e \"v\">]><root a=\"&e;\"/>".to_owned();
        let doc = XmlDocument::parse(xml).unwrap();
        let parsed = doc.parse_doc().unwrap();
        assert_eq!(parsed.root_element().attribute("a"), Some("v"));
    }
}
