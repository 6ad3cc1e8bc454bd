//! Tailoring — the analyze endpoint.
//!
//! Flow: validate input → build prompt → call completion provider →
//! extract/parse JSON → validate shape → respond. No retries, no caching,
//! no shared mutable state; requests are fully independent.

pub mod handlers;
pub mod prompts;
pub mod result;
