//! Document tree consumed by the converter.
//!
//! A tree is made of [`Element`]s (a lower-cased tag name plus ordered children)
//! and text leaves. Trees usually come from [`parse_html`](crate::parse_html), but
//! any producer can build them directly:
//!
//! ```
//! use html_to_text::{Element, Node};
//!
//! let root = Element::new("div").with_child(Element::new("p").with_text("Hello"));
//! assert_eq!(root.children.len(), 1);
//! assert!(matches!(&root.children[0], Node::Element(p) if p.tag == "p"));
//! ```

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text, emitted verbatim.
    Text(String),
    /// An element with children.
    Element(Element),
}

impl Node {
    /// Creates a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Returns the element if this node is one.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    fn from(content: &str) -> Self {
        Self::Text(content.to_string())
    }
}

impl From<String> for Node {
    fn from(content: String) -> Self {
        Self::Text(content)
    }
}

/// An element node. The tag name is always stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Lower-cased element name.
    pub tag: String,
    /// Ordered children.
    pub children: Vec<Node>,
}

impl Element {
    /// Creates an element with no children.
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self {
            tag: tag.as_ref().to_ascii_lowercase(),
            children: Vec::new(),
        }
    }

    /// Appends a child, builder style.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends several children, builder style.
    #[must_use]
    pub fn with_children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Appends a text child, builder style.
    #[must_use]
    pub fn with_text(self, content: impl Into<String>) -> Self {
        self.with_child(Node::Text(content.into()))
    }

    /// Appends a child in place.
    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Returns `true` if the tag matches `name` (case-insensitive).
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.tag.eq_ignore_ascii_case(name)
    }
}
