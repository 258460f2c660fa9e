//! # Wordhoard
//!
//! A fixed-capacity, in-memory word dictionary for Rust, built to back
//! spell-checking consumers.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Near-constant-time membership checks over a chained hash index
//! - Case-insensitive matching
//! - Bulk population from word-list files or any buffered reader
//! - Explicit release/reload lifecycle with occupancy statistics

pub mod error;
pub mod lexicon;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
