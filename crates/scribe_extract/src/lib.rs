//! Transcript extraction from chat page snapshots.
//!
//! Nine host platforms render conversations into nine wildly different DOM
//! shapes. Each gets a [`Strategy`]: a pure function from a parsed snapshot to
//! a normalized sequence of [`Turn`]s. Strategies share the selector-fallback
//! mechanism ([`scribe_dom::Document::select_fallback`]), the text normalizer
//! ([`normalize`]), and the ordering/deduplication pass ([`order`]) for
//! platforms whose message elements are scattered across the document.

pub mod error;
pub mod normalize;
pub mod order;
pub mod platform;
pub mod strategy;
mod strategies;

pub mod turn;

pub use error::Error;
pub use platform::Platform;
pub use strategy::{Strategy, extract, strategy_for};
pub use turn::{Role, Turn};
