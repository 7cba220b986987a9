/// One element of a configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigNode {
    /// Element tag name.
    pub tag: String,
    /// Child elements in document order.
    pub children: Vec<ConfigNode>,
    /// Text content, if any non-whitespace text was present.
    pub text: Option<String>,
}

impl ConfigNode {
    /// Create an empty node with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Builder-style helper that sets the node's text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder-style helper that appends a child.
    pub fn with_child(mut self, child: ConfigNode) -> Self {
        self.children.push(child);
        self
    }

    /// First child with the provided tag.
    pub fn child(&self, tag: &str) -> Option<&ConfigNode> {
        self.children.iter().find(|child| child.tag == tag)
    }

    /// All children with the provided tag, in document order.
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a ConfigNode> {
        self.children.iter().filter(move |child| child.tag == tag)
    }

    /// Walk a nested child path and return the terminal node's raw text.
    pub fn text_at<'a>(&'a self, path: &[&str]) -> Option<&'a str> {
        let mut current = self;
        for segment in path {
            current = current.child(segment)?;
        }
        current.text.as_deref()
    }

    /// Trimmed text of the first child named `tag`.
    ///
    /// Returns `None` when the child is missing, has no text, or its text is
    /// blank after trimming. Configuration exports routinely carry empty
    /// leaves like `<descr></descr>`, and callers treat those as unset.
    pub fn leaf(&self, tag: &str) -> Option<&str> {
        self.child(tag)?
            .text
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::ConfigNode;

    fn staticmap() -> ConfigNode {
        ConfigNode::new("staticmap")
            .with_child(ConfigNode::new("mac").with_text("00:11:22:33:44:55"))
            .with_child(ConfigNode::new("hostname").with_text("  printer \n"))
            .with_child(ConfigNode::new("descr").with_text("   "))
            .with_child(ConfigNode::new("cid"))
    }

    #[test]
    fn text_at_walks_nested_path() {
        let root = ConfigNode::new("root").with_child(
            ConfigNode::new("parent").with_child(ConfigNode::new("child").with_text("value")),
        );

        assert_eq!(root.text_at(&["parent", "child"]), Some("value"));
        assert_eq!(root.text_at(&["parent", "missing"]), None);
    }

    #[test]
    fn leaf_trims_and_treats_blank_as_absent() {
        let node = staticmap();
        assert_eq!(node.leaf("mac"), Some("00:11:22:33:44:55"));
        assert_eq!(node.leaf("hostname"), Some("printer"));
        assert_eq!(node.leaf("descr"), None);
        assert_eq!(node.leaf("cid"), None);
        assert_eq!(node.leaf("ipaddr"), None);
    }

    #[test]
    fn children_named_preserves_order() {
        let root = ConfigNode::new("lan")
            .with_child(ConfigNode::new("staticmap").with_text("a"))
            .with_child(ConfigNode::new("range"))
            .with_child(ConfigNode::new("staticmap").with_text("b"));

        let texts: Vec<_> = root
            .children_named("staticmap")
            .filter_map(|n| n.text.as_deref())
            .collect();
        assert_eq!(texts, vec!["a", "b"]);
    }
}
