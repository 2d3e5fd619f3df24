//! Property tests for the value primitives.
//!
//! Properties use randomized input generation to check the laws each
//! primitive promises: record round-trips and hash consistency, clamp range
//! and idempotence, and compute-once caching.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/record.rs"]
mod record;

#[path = "properties/clamp.rs"]
mod clamp;

#[path = "properties/lazy.rs"]
mod lazy;
