//! Configuration options for HTML to text conversion.

/// Default maximum element nesting accepted by the parser adapter and the walker.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Main conversion options.
///
/// Options control how input is turned into a document tree and how deep the
/// walker may recurse. They never change the formatting rules themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ConversionOptions {
    /// Maximum element nesting depth. Deeper trees are rejected with
    /// [`ConversionError::DepthLimitExceeded`](crate::ConversionError::DepthLimitExceeded).
    pub max_depth: usize,

    /// Tag names dropped entirely (element and content) when parsing HTML.
    pub drop_tags: Vec<String>,

    /// Decode HTML character references (`&amp;`, `&#169;`, ...) in text when parsing.
    pub decode_entities: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            drop_tags: vec!["script".to_string(), "style".to_string()],
            decode_entities: true,
        }
    }
}

impl ConversionOptions {
    /// Returns `true` if elements named `tag_name` should be dropped while parsing.
    pub(crate) fn drops(&self, tag_name: &str) -> bool {
        self.drop_tags.iter().any(|tag| tag.eq_ignore_ascii_case(tag_name))
    }
}
