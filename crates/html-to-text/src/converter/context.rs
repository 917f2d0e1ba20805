//! Traversal context threaded through the recursive walker.

/// Kind of an enclosing list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListKind {
    /// `<ol>`
    Ordered,
    /// `<ul>`
    Unordered,
}

impl ListKind {
    /// Bullet emitted in front of an item of this list.
    ///
    /// Ordered items always render as `1. `; item numbers are not tracked.
    pub(crate) const fn bullet(self) -> &'static str {
        match self {
            Self::Ordered => "1. ",
            Self::Unordered => "• ",
        }
    }
}

/// Per-call conversion context.
///
/// Each recursive call receives the context of its parent and derives a new one
/// instead of mutating shared state, so nothing leaks between siblings.
#[derive(Debug, Clone, Default)]
pub(crate) struct Context {
    /// Kinds of the enclosing lists, innermost last.
    pub(crate) list_kinds: Vec<ListKind>,
}

impl Context {
    /// Context for the children of a list of the given kind.
    pub(crate) fn entering_list(&self, kind: ListKind) -> Self {
        let mut list_kinds = self.list_kinds.clone();
        list_kinds.push(kind);
        Self { list_kinds }
    }

    /// Number of enclosing lists.
    pub(crate) fn list_depth(&self) -> usize {
        self.list_kinds.len()
    }

    /// Kind of the innermost enclosing list.
    pub(crate) fn current_list(&self) -> Option<ListKind> {
        self.list_kinds.last().copied()
    }
}
