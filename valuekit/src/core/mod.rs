//! Deterministic, pure value primitives.
//!
//! Core modules are free of I/O side effects. They operate on in-memory values
//! and return deterministic outputs suitable for tests.

pub mod bounded;
pub mod clamp;
pub mod error;
pub mod field;
pub mod lazy;
pub mod record;
pub mod schema;
