//! Request context management.
//!
//! Binds a caller-supplied correlation id to a request context and derives
//! logging handles from it.

pub mod binder;

pub use binder::*;
