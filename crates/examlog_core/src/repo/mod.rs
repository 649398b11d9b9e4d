//! Repository layer over backing media.
//!
//! # Responsibility
//! - Round-trip the full record collection against a backing medium.
//! - Isolate row encoding/decoding details from service orchestration.
//!
//! # Invariants
//! - Loads reject malformed persisted rows instead of masking them.
//! - Saves always rewrite the entire collection.

pub mod record_store;
