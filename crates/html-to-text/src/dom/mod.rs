//! Builds a [`Node`] tree from an HTML string using the `tl` parser.

mod preprocessing;
mod repair;

use std::borrow::Cow;

use log::{debug, warn};

use crate::error::{ConversionError, Result};
use crate::node::{Element, Node};
use crate::options::ConversionOptions;
use crate::text::decode_html_entities_cow;

use preprocessing::prepare_raw_text_elements;
use repair::{has_omitted_end_tags, repair_with_html5ever};

/// Tag of the synthetic element wrapping the parsed top-level nodes.
pub const ROOT_TAG: &str = "div";

/// Elements that never have content.
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source", "track", "wbr",
];

/// Parses HTML into a document tree rooted at a synthetic `div`.
///
/// Comments and markup declarations are discarded, as are elements listed in
/// `options.drop_tags` together with their content. Text is kept verbatim
/// apart from optional entity decoding. Documents that leave out optional end
/// tags (`</td>`, `</li>`, `</p>`, ...) are repaired with html5ever first.
///
/// # Errors
///
/// Returns [`ConversionError::ParseError`] if the parser rejects the input and
/// [`ConversionError::DepthLimitExceeded`] if elements nest deeper than
/// `options.max_depth`.
pub fn parse_html(html: &str, options: &ConversionOptions) -> Result<Element> {
    let html: Cow<'_, str> = if has_omitted_end_tags(html) {
        match repair_with_html5ever(html) {
            Some(repaired) => {
                debug!("repaired omitted end tags with html5ever");
                Cow::Owned(repaired)
            }
            None => {
                warn!("html5ever repair failed, parsing input as-is");
                Cow::Borrowed(html)
            }
        }
    } else {
        Cow::Borrowed(html)
    };
    let html = prepare_raw_text_elements(&html, options);

    let dom = tl::parse(&html, tl::ParserOptions::default())
        .map_err(|_| ConversionError::ParseError("Failed to parse HTML".to_string()))?;
    let parser = dom.parser();

    let mut root = Element::new(ROOT_TAG);
    for child_handle in dom.children() {
        build_nodes(child_handle, parser, options, 1, &mut root.children)?;
    }

    debug!("parsed {} bytes of HTML into {} top-level nodes", html.len(), root.children.len());
    Ok(root)
}

/// Appends the nodes built from `node_handle` to `out`.
///
/// Usually one node; none for comments and dropped elements, and several when
/// `tl` hangs the following siblings off a void element.
fn build_nodes(
    node_handle: &tl::NodeHandle,
    parser: &tl::Parser,
    options: &ConversionOptions,
    depth: usize,
    out: &mut Vec<Node>,
) -> Result<()> {
    let Some(node) = node_handle.get(parser) else {
        return Ok(());
    };

    match node {
        tl::Node::Raw(bytes) => {
            let raw = bytes.as_utf8_str();
            if raw.is_empty() {
                return Ok(());
            }
            let text = if options.decode_entities {
                decode_html_entities_cow(raw.as_ref()).into_owned()
            } else {
                raw.into_owned()
            };
            out.push(Node::Text(text));
        }
        tl::Node::Tag(tag) => {
            let raw_name = tag.name().as_utf8_str();
            let tag_name = normalized_tag_name(&raw_name);
            if is_declaration(&tag_name) || options.drops(&tag_name) {
                return Ok(());
            }
            if depth >= options.max_depth {
                warn!("<{tag_name}> at depth {depth} exceeds max_depth while parsing");
                return Err(ConversionError::DepthLimitExceeded {
                    limit: options.max_depth,
                });
            }

            let children = tag.children();
            if is_void_element(&tag_name) {
                out.push(Node::Element(Element::new(&tag_name)));
                for child_handle in children.top().iter() {
                    build_nodes(child_handle, parser, options, depth, out)?;
                }
                return Ok(());
            }

            let mut element = Element::new(&tag_name);
            for child_handle in children.top().iter() {
                build_nodes(child_handle, parser, options, depth + 1, &mut element.children)?;
            }
            if element.is("pre") {
                strip_leading_newline(&mut element);
            }
            out.push(Node::Element(element));
        }
        tl::Node::Comment(_) => {}
    }
    Ok(())
}

/// `tl` keeps the self-closing slash in the name (`<br/>` is `"br/"`).
fn normalized_tag_name(raw: &str) -> Cow<'_, str> {
    let trimmed = raw.trim().trim_end_matches('/').trim_end();
    if trimmed.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(trimmed.to_ascii_lowercase())
    } else {
        Cow::Borrowed(trimmed)
    }
}

fn is_void_element(tag_name: &str) -> bool {
    VOID_ELEMENTS.contains(&tag_name)
}

/// `<!DOCTYPE ...>` and `<?xml ...?>` are not elements.
fn is_declaration(tag_name: &str) -> bool {
    tag_name.starts_with('!') || tag_name.starts_with('?')
}

/// A newline directly after `<pre>` is not content.
fn strip_leading_newline(pre: &mut Element) {
    let Some(Node::Text(text)) = pre.children.first_mut() else {
        return;
    };
    let stripped = text
        .strip_prefix("\r\n")
        .or_else(|| text.strip_prefix('\n'))
        .map(str::len);
    if let Some(remaining) = stripped {
        let newline_len = text.len() - remaining;
        text.replace_range(..newline_len, "");
        if text.is_empty() {
            pre.children.remove(0);
        }
    }
}
