//! Main conversion pipeline for HTML to text.
//!
//! This module implements the conversion entry points and the recursive tree walker
//! that linearizes a document tree into structured plain text.

use log::{debug, trace, warn};

use crate::converter::block::{BlockKind, handle_block};
use crate::converter::context::{Context, ListKind};
use crate::converter::list::{handle_list, handle_list_item};
use crate::converter::table::{handle_row, handle_table};
use crate::error::{ConversionError, Result};
use crate::node::{Element, Node};
use crate::options::ConversionOptions;
use crate::text::normalize;

/// Converts a document tree to normalized text.
///
/// This is the main entry point when a tree is already available. The walker
/// output is passed through [`normalize`](crate::normalize) exactly once.
///
/// # Errors
///
/// Returns [`ConversionError::DepthLimitExceeded`] when elements nest deeper
/// than `options.max_depth`.
pub fn convert(root: &Element, options: &ConversionOptions) -> Result<String> {
    let raw = render(root, options)?;
    let text = normalize(&raw);
    debug!("converted tree: {} raw bytes, {} normalized bytes", raw.len(), text.len());
    Ok(text)
}

/// Walks a document tree and returns the raw, un-normalized text.
///
/// List indentation is only visible here: normalization strips whitespace
/// that follows a newline.
///
/// # Errors
///
/// Returns [`ConversionError::DepthLimitExceeded`] when elements nest deeper
/// than `options.max_depth`.
pub fn render(root: &Element, options: &ConversionOptions) -> Result<String> {
    let mut output = String::new();
    let ctx = Context::default();
    walk_element(root, &mut output, options, &ctx, 0)?;
    Ok(output)
}

/// Append a newline unless the output already ends with one.
pub(crate) fn ensure_trailing_newline(output: &mut String) {
    if !output.ends_with('\n') {
        output.push('\n');
    }
}

/// Recursively walk a node and append its text to `output`.
pub(crate) fn walk_node(
    node: &Node,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    depth: usize,
) -> Result<()> {
    match node {
        Node::Text(content) => {
            output.push_str(content);
            Ok(())
        }
        Node::Element(element) => walk_element(element, output, options, ctx, depth),
    }
}

/// Walk every child of `element` in order. Children sit one level below `depth`.
pub(crate) fn walk_children(
    element: &Element,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    depth: usize,
) -> Result<()> {
    for child in &element.children {
        walk_node(child, output, options, ctx, depth + 1)?;
    }
    Ok(())
}

/// Dispatch an element on its kind.
pub(crate) fn walk_element(
    element: &Element,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    depth: usize,
) -> Result<()> {
    if depth >= options.max_depth {
        warn!("element <{}> at depth {depth} exceeds max_depth", element.tag);
        return Err(ConversionError::DepthLimitExceeded {
            limit: options.max_depth,
        });
    }

    trace!("walk <{}> depth={depth} lists={}", element.tag, ctx.list_depth());

    match element.tag.as_str() {
        "ul" => handle_list(element, ListKind::Unordered, output, options, ctx, depth),
        "ol" => handle_list(element, ListKind::Ordered, output, options, ctx, depth),
        "li" => handle_list_item(element, output, options, ctx, depth),
        "table" => handle_table(element, output, options, ctx, depth),
        "tr" => handle_row(element, output, options, ctx, depth),
        "br" => {
            walk_children(element, output, options, ctx, depth)?;
            output.push('\n');
            Ok(())
        }
        tag => match BlockKind::from_tag(tag) {
            Some(kind) => handle_block(element, kind, output, options, ctx, depth),
            None => walk_children(element, output, options, ctx, depth),
        },
    }
}
