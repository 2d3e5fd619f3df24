//! Value-semantics and lazy-evaluation primitives.
//!
//! The crate provides three independent building blocks:
//!
//! - [`ValueRecord`](core::record::ValueRecord): immutable records with
//!   structural equality and hashing, shallow copy-with-override, and
//!   positional destructuring.
//! - [`BoundedProperty`](core::bounded::BoundedProperty): a mutable value
//!   clamped into a fixed inclusive range on every write.
//! - [`LazyCache`](core::lazy::LazyCache): a value computed at most once, on
//!   first read, with producer failures left uncached.
//!
//! The architecture keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic primitives. No I/O.
//! - **[`model`]**: Domain types (products, tasks, customers) built on them.
//! - **[`io`]**: Configuration loading and writing.
//!
//! [`report`] ties model and config together for the `valuekit` CLI.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod model;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
