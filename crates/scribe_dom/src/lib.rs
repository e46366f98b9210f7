//! Parsed HTML snapshots of live chat pages.
//!
//! A [`Document`] is one point-in-time rendering of a page, captured by a
//! host-side companion (or fetched directly for server-rendered pages) and
//! handed to the extraction layer. The API is deliberately narrow: select
//! elements, read their text and attributes, walk up to matching ancestors,
//! and read a sort key. Nothing here mutates the tree.

pub mod document;

pub use document::{Document, Node};
