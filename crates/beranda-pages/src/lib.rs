//! Document tree and page assemblers for the beranda site.
//!
//! Assemblers are pure functions from build-time content records to a tree
//! of typed nodes; a separate traversal renders the tree to HTML. No I/O
//! happens in this crate.

pub mod dom;
pub mod home;
pub mod learning;
pub mod page;
pub mod ui;

pub use dom::{render, Element, Node};
pub use home::home_page;
pub use learning::learning_page;
pub use page::Page;
