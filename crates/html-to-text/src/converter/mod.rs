//! HTML to text conversion.
//!
//! The walker in [`main`] dispatches on element kind; block, list and table
//! formatting live in their own modules.

pub(crate) mod block;
pub(crate) mod context;
pub(crate) mod list;
pub mod main;
pub(crate) mod table;

pub use main::{convert, render};
