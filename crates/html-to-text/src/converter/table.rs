//! Tables rendered as pipe-delimited rows.
//!
//! Each cell is walked into its own scratch buffer, so cell content never
//! touches the surrounding output until the whole row is assembled. Tables
//! nested in cells get their own buffers the same way, one per call frame.

use crate::converter::context::Context;
use crate::converter::main::{walk_children, walk_element};
use crate::error::Result;
use crate::node::{Element, Node};
use crate::options::ConversionOptions;

/// Surround the rows of a table with newlines.
pub(crate) fn handle_table(
    element: &Element,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    depth: usize,
) -> Result<()> {
    output.push('\n');
    walk_children(element, output, options, ctx, depth)?;
    output.push('\n');
    Ok(())
}

/// Render a `tr` as `| a | b |`. Children other than `td`/`th` elements are skipped.
pub(crate) fn handle_row(
    element: &Element,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    depth: usize,
) -> Result<()> {
    let mut cells = Vec::new();
    for cell in element.children.iter().filter_map(Node::as_element).filter(|child| is_cell(child)) {
        cells.push(cell_text(cell, options, ctx, depth + 1)?);
    }
    push_row(output, &cells);
    Ok(())
}

fn is_cell(element: &Element) -> bool {
    element.is("td") || element.is("th")
}

fn cell_text(cell: &Element, options: &ConversionOptions, ctx: &Context, depth: usize) -> Result<String> {
    let mut text = String::new();
    walk_element(cell, &mut text, options, ctx, depth)?;
    Ok(text.trim().to_string())
}

fn push_row(output: &mut String, cells: &[String]) {
    output.push_str("| ");
    output.push_str(&cells.join(" | "));
    output.push_str(" |\n");
}
