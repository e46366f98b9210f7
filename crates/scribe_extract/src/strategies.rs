//! Per-platform extraction strategies.
//!
//! Selector chains and class markers in these modules are observations of the
//! live host pages, not invariants; each module leans on the shared fallback,
//! normalization, and ordering machinery so a host-side refactor degrades to
//! "fewer turns this cycle" instead of breakage.

mod chatgpt;
mod chatllm;
mod claude;
mod deepseek;
mod gemini;
mod grok;
mod manus;
mod perplexity;
mod poe;

#[cfg(test)]
#[path = "strategies_tests.rs"]
mod tests;
