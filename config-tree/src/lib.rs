//! Labeled configuration trees loaded from XML exports.
//!
//! A configuration document is represented as a tree of [`ConfigNode`]s:
//! every node has a tag, ordered children and optional text. Attributes are
//! not kept; pfSense exports carry their data in element text. Domain crates walk the tree by tag name and never touch the XML
//! tokenizer directly.

pub mod node;
pub mod parser;

pub use node::ConfigNode;
pub use parser::{parse, parse_file, ParseError};
