//! HTTP delivery of captured exchanges.
//!
//! The receiving service fixes the wire shape ([`CaptureRequest`]); this
//! crate serializes it and posts it. [`HttpSink`] defaults to a single
//! attempt per capture, with an optional bounded retry budget for operators
//! whose endpoint is flaky.

pub mod error;
pub mod http;
pub mod payload;

pub use error::{Error, Result};
pub use http::HttpSink;
pub use payload::{CaptureRequest, Metadata};
