//! Block-level elements: paragraphs, headings, quotes and code blocks.

use crate::converter::context::Context;
use crate::converter::main::{ensure_trailing_newline, walk_children};
use crate::error::Result;
use crate::node::Element;
use crate::options::ConversionOptions;

const CODE_FENCE: &str = "```";

/// Block element kinds that get separated from surrounding content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockKind {
    /// `p`, `div` and `code`: separation only.
    Plain,
    /// `h1`..`h6` with their level.
    Heading(usize),
    /// `blockquote`
    Blockquote,
    /// `pre`, rendered as a fenced code block.
    Preformatted,
}

impl BlockKind {
    pub(crate) fn from_tag(tag_name: &str) -> Option<Self> {
        match tag_name {
            "p" | "div" | "code" => Some(Self::Plain),
            // `hr`, `header` and `hgroup` are not headings and emit no separator.
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = tag_name.chars().last().and_then(|c| c.to_digit(10)).unwrap_or(1) as usize;
                Some(Self::Heading(level))
            }
            "blockquote" => Some(Self::Blockquote),
            "pre" => Some(Self::Preformatted),
            _ => None,
        }
    }
}

/// Emit a block element: separate it from preceding inline text, write its
/// opening marker, walk its children, then close it.
pub(crate) fn handle_block(
    element: &Element,
    kind: BlockKind,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    depth: usize,
) -> Result<()> {
    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }

    match kind {
        BlockKind::Heading(level) => push_heading_marker(output, level),
        // One prefix per element, not per line of content.
        BlockKind::Blockquote => output.push_str("> "),
        BlockKind::Preformatted => {
            output.push_str(CODE_FENCE);
            output.push('\n');
        }
        BlockKind::Plain => {}
    }

    walk_children(element, output, options, ctx, depth)?;

    if kind == BlockKind::Preformatted {
        output.push('\n');
        output.push_str(CODE_FENCE);
        output.push('\n');
    } else {
        ensure_trailing_newline(output);
    }
    Ok(())
}

fn push_heading_marker(output: &mut String, level: usize) {
    output.push_str(&"#".repeat(level));
    output.push(' ');
}
