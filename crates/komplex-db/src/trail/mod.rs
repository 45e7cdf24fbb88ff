//! JSONL activity trail.
//!
//! Per-actor JSONL files record every mutation the service makes. The trail
//! is an audit log only; the key-value store stays authoritative.

pub mod reader;
pub mod writer;
