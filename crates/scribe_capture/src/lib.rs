//! Exchange pairing, capture gating, and dispatch.
//!
//! This crate owns everything between "a snapshot was extracted into turns"
//! and "the sink was handed an exchange": the backward-scanning selector that
//! finds the newest completed back-and-forth, the fingerprint gate that keeps
//! an exchange from being delivered twice in a row, and the per-tick pipeline
//! that wires it together with a fire-and-forget dispatch.

pub mod capture;
pub mod exchange;
pub mod fingerprint;
pub mod gate;
pub mod page;
pub mod sink;

pub use capture::{Capturer, Outcome};
pub use exchange::{Exchange, ExchangePair, select_latest};
pub use fingerprint::Fingerprint;
pub use gate::CaptureContext;
pub use page::PageInfo;
pub use sink::{CaptureEvent, Sink, SinkError};
