//! High-performance HTML to plain text conversion.
//!
//! The converter linearizes a document tree into readable text with light,
//! markdown-like block markers: `#` headings, `•`/`1.` list bullets with
//! nesting indentation, `| a | b |` table rows, `> ` quotes and fenced code
//! blocks. A final pass normalizes whitespace.
//!
//! ```
//! use html_to_text::{ConversionOptions, convert_html};
//!
//! let text = convert_html("<h2>Title</h2><p>Body</p>", &ConversionOptions::default()).unwrap();
//! assert_eq!(text, "## Title\nBody");
//! ```
//!
//! Trees built by other producers can be converted directly with [`convert`].

pub mod converter;
pub mod dom;
pub mod error;
pub mod node;
pub mod options;
pub mod text;

pub use converter::{convert, render};
pub use dom::parse_html;
pub use error::{ConversionError, Result};
pub use node::{Element, Node};
pub use options::{ConversionOptions, DEFAULT_MAX_DEPTH};
pub use text::normalize;

/// Parses `html` and converts the resulting tree to normalized text.
///
/// # Errors
///
/// Returns an error if parsing fails or the document nests deeper than
/// `options.max_depth`.
pub fn convert_html(html: &str, options: &ConversionOptions) -> Result<String> {
    let root = parse_html(html, options)?;
    convert(&root, options)
}

/// Parses `html` and returns the walker output without whitespace normalization.
///
/// # Errors
///
/// Same as [`convert_html`].
pub fn render_html(html: &str, options: &ConversionOptions) -> Result<String> {
    let root = parse_html(html, options)?;
    render(&root, options)
}
