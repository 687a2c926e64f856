//! Reserved field names.
//!
//! These names are the contract with downstream log parsers and must not
//! change. `responseTime` and `status` are reserved for collaborators such as
//! HTTP middleware; nothing in this crate populates them.

pub const CORRELATION_ID: &str = "correlationId";
pub const RESPONSE_TIME: &str = "responseTime";
pub const STACK_TRACE: &str = "stackTrace";
pub const ADDITIONAL_INFO: &str = "additionalInfo";
pub const STATUS_CODE: &str = "status";

/// Record timestamp.
pub const TIME: &str = "time";
pub const LEVEL: &str = "level";
pub const MESSAGE: &str = "message";
