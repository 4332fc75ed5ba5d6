//! Summation with two call shapes.
//!
//! [`sum_up`] takes an already-constructed sequence; the [`sum_up!`]
//! macro accepts any number of integer arguments at the call site and
//! collects them into a sequence. Rust has no variadic function
//! parameters, so the declarative macro is the native variable-arity
//! mechanism fronting the slice entry point. Both shapes have identical
//! semantics: a single pass, starting from zero.

pub mod sum;

pub use sum::sum_up;
