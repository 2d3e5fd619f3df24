//! Side-effecting helpers (filesystem).

pub mod config;
