//! Domain types built on the core primitives.

pub mod customer;
pub mod product;
pub mod task;
