//! Correlation id binding.

use std::sync::Arc;

use crate::handle::LogHandle;
use crate::logging::fields;
use crate::logging::sink::{Sink, SinkLogger};

/// Request types that carry a request-scoped logger.
pub trait LoggerCarrier {
    fn request_logger(&self) -> Option<&SinkLogger>;
}

/// Immutable request-scoped context.
///
/// Deriving a child never touches the parent, so contexts can be shared
/// freely across threads.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    logger: Option<Arc<SinkLogger>>,
}

impl RequestContext {
    /// Root context with no logger attached.
    pub fn background() -> Self {
        Self::default()
    }

    /// Root context whose derived loggers write to `sink`.
    pub fn with_sink(sink: Arc<dyn Sink>) -> Self {
        Self {
            logger: Some(Arc::new(SinkLogger::new(sink))),
        }
    }

    pub fn correlation_id(&self) -> Option<&str> {
        self.logger
            .as_deref()
            .and_then(|logger| logger.field(fields::CORRELATION_ID))
            .and_then(|v| v.as_str())
    }
}

impl LoggerCarrier for RequestContext {
    fn request_logger(&self) -> Option<&SinkLogger> {
        self.logger.as_deref()
    }
}

/// Derive a context whose logger writes `correlationId` on every record.
///
/// The child keeps the parent's sink (or the default sink when the parent
/// has none). The id is not validated; an empty string is written as is.
pub fn bind_correlation_id(parent: &RequestContext, correlation_id: &str) -> RequestContext {
    let base = parent.request_logger().cloned().unwrap_or_default();

    RequestContext {
        logger: Some(Arc::new(
            base.with_field(fields::CORRELATION_ID, correlation_id),
        )),
    }
}

/// Handle bound to the context's logger.
///
/// Falls back to the default sink without fields when nothing is attached.
pub fn handle_from_context<C>(ctx: &C) -> LogHandle
where
    C: LoggerCarrier + ?Sized,
{
    let logger = ctx.request_logger().cloned().unwrap_or_default();
    LogHandle::new(logger)
}
