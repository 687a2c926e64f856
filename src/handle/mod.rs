//! Contextual log handle.
//!
//! A [`LogHandle`] carries a sink binding plus pending enrichment that is
//! consumed by exactly one emission:
//! - `Idle` -> `additional_info` / `stack_trace` / `prefix` -> `Pending`
//! - any leveled emission -> `Idle`

mod log_handle;
mod macros;
mod pending;

pub use log_handle::{HandleState, LogHandle};
