//! # Common Sequence Utilities
//!
//! Shared building blocks for the function-value example crates.
//!
//! ## Modules
//!
//! - [`sequence`]: generic slice helpers (`map`, `fold_left`, `for_each`)
//!   with `Fn`-bound parameters
//! - [`persistent`]: a persistent integer-friendly sequence backed by
//!   `im::Vector`, where every update produces a new sequence
//!
//! ## Design Principles
//!
//! 1. **Read-only inputs**: functions borrow slices and never mutate them
//! 2. **Fresh outputs**: transformations allocate a new sequence of the
//!    same length instead of updating in place
//! 3. **Iterator-centric**: helpers delegate to iterator combinators

pub mod persistent;
pub mod sequence;

// Re-export the main type for convenience
pub use persistent::PersistentSeq;
