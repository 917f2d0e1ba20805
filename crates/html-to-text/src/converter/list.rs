//! Ordered and unordered lists.

use crate::converter::context::{Context, ListKind};
use crate::converter::main::{ensure_trailing_newline, walk_children};
use crate::error::Result;
use crate::node::Element;
use crate::options::ConversionOptions;

/// Spaces of indentation per nesting level below the outermost list.
const INDENT_WIDTH: usize = 2;

/// Walk a `ul`/`ol` with its kind pushed onto the list context.
pub(crate) fn handle_list(
    element: &Element,
    kind: ListKind,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    depth: usize,
) -> Result<()> {
    let list_ctx = ctx.entering_list(kind);
    walk_children(element, output, options, &list_ctx, depth)?;
    ensure_trailing_newline(output);
    Ok(())
}

/// Start an item on a fresh line with indentation and the bullet of the
/// innermost list, then let its content flow after the bullet.
pub(crate) fn handle_list_item(
    element: &Element,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    depth: usize,
) -> Result<()> {
    output.push('\n');
    output.push_str(&" ".repeat(ctx.list_depth().saturating_sub(1) * INDENT_WIDTH));
    // An item outside any list falls back to the unordered bullet.
    output.push_str(ctx.current_list().unwrap_or(ListKind::Unordered).bullet());
    walk_children(element, output, options, ctx, depth)
}
