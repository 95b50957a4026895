//! Assembled page: document metadata plus the body tree.

use crate::dom::Node;

/// Output of a page assembler, ready for the rendering stage.
#[derive(Debug, Clone)]
pub struct Page {
    /// Document title
    pub title: String,

    /// Meta description
    pub description: String,

    /// Body document tree
    pub body: Node,
}
