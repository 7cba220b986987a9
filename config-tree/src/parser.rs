use std::fs;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::name::QName;
use quick_xml::Reader;
use thiserror::Error;

use crate::node::ConfigNode;

/// Errors raised while loading a configuration document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The tokenizer rejected the input.
    #[error("failed to parse XML: {0}")]
    Xml(#[from] quick_xml::Error),
    /// A tag name or CDATA section was not valid UTF-8.
    #[error("invalid UTF-8 in XML: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    /// An entity reference could not be decoded.
    #[error("failed to decode XML text: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),
    /// The file could not be read.
    #[error("failed to read XML file: {0}")]
    Io(#[from] std::io::Error),
    /// The token stream does not form a single well-nested tree.
    #[error("malformed XML: {0}")]
    Malformed(String),
}

/// Parse an XML document into a [`ConfigNode`] tree.
///
/// Only element names, nesting and text are kept. Attributes, comments,
/// processing instructions and the declaration are dropped.
pub fn parse(xml: &[u8]) -> Result<ConfigNode, ParseError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut tree = TreeBuilder::default();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => tree.open(tag_name(e.name())?),
            Event::Empty(e) => {
                tree.open(tag_name(e.name())?);
                tree.close()?;
            }
            Event::End(_) => tree.close()?,
            Event::Text(e) => tree.text(&e.unescape()?),
            Event::CData(e) => tree.text(std::str::from_utf8(e.as_ref())?),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    tree.finish()
}

/// Read and parse an XML file.
pub fn parse_file(path: &Path) -> Result<ConfigNode, ParseError> {
    parse(&fs::read(path)?)
}

/// Stack of open elements plus the completed root.
#[derive(Default)]
struct TreeBuilder {
    open: Vec<ConfigNode>,
    root: Option<ConfigNode>,
}

impl TreeBuilder {
    fn open(&mut self, tag: String) {
        self.open.push(ConfigNode::new(tag));
    }

    fn close(&mut self) -> Result<(), ParseError> {
        let node = self.open.pop().ok_or_else(|| {
            ParseError::Malformed("closing tag without matching open tag".to_string())
        })?;
        if let Some(parent) = self.open.last_mut() {
            parent.children.push(node);
        } else if self.root.is_none() {
            self.root = Some(node);
        } else {
            return Err(ParseError::Malformed(format!(
                "second top-level element <{}>",
                node.tag
            )));
        }
        Ok(())
    }

    // Whitespace between elements is layout, not content.
    fn text(&mut self, text: &str) {
        let Some(current) = self.open.last_mut() else {
            return;
        };
        if text.trim().is_empty() {
            return;
        }
        current
            .text
            .get_or_insert_with(String::new)
            .push_str(text);
    }

    fn finish(self) -> Result<ConfigNode, ParseError> {
        if let Some(unclosed) = self.open.last() {
            return Err(ParseError::Malformed(format!(
                "element <{}> is not closed",
                unclosed.tag
            )));
        }
        self.root
            .ok_or_else(|| ParseError::Malformed("document has no root element".to_string()))
    }
}

fn tag_name(name: QName<'_>) -> Result<String, ParseError> {
    Ok(std::str::from_utf8(name.as_ref())?.to_string())
}

#[cfg(test)]
mod tests {
    use super::{parse, ParseError};

    #[test]
    fn unescapes_entities_and_keeps_cdata() {
        let root = parse(
            br#"<pfsense><a>Tom &amp; Jerry</a><b><![CDATA[<raw> & text]]></b></pfsense>"#,
        )
        .expect("parse");
        assert_eq!(root.text_at(&["a"]), Some("Tom & Jerry"));
        assert_eq!(root.text_at(&["b"]), Some("<raw> & text"));
    }

    #[test]
    fn skips_declaration_and_comments() {
        let root = parse(
            b"<?xml version=\"1.0\"?>\n<!-- export -->\n<pfsense>\n  <version>23.3</version>\n</pfsense>\n",
        )
        .expect("parse");
        assert_eq!(root.tag, "pfsense");
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.text, None);
    }

    #[test]
    fn self_closing_elements_become_empty_children() {
        let root = parse(br#"<dhcpd><lan enable="1"/><opt1></opt1></dhcpd>"#).expect("parse");
        let tags: Vec<&str> = root.children.iter().map(|c| c.tag.as_str()).collect();
        assert_eq!(tags, vec!["lan", "opt1"]);
        assert!(root.children.iter().all(|c| c.text.is_none()));
    }

    #[test]
    fn rejects_unclosed_element() {
        let err = parse(b"<pfsense><dhcpd>").expect_err("should fail");
        assert!(matches!(err, ParseError::Malformed(_) | ParseError::Xml(_)));
    }

    #[test]
    fn rejects_multiple_roots() {
        let err = parse(b"<a/><b/>").expect_err("should fail");
        assert!(matches!(err, ParseError::Malformed(_) | ParseError::Xml(_)));
    }

    #[test]
    fn rejects_empty_document() {
        let err = parse(b"").expect_err("should fail");
        assert!(matches!(err, ParseError::Malformed(_)));
    }
}
