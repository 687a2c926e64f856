//! Enrichment accumulated on a handle between two emissions.

use serde_json::{Map, Value};

use crate::logging::fields;

#[derive(Debug, Default)]
pub(crate) struct PendingState {
    prefix: String,
    error: Option<anyhow::Error>,
    additional_info: Option<Map<String, Value>>,
}

impl PendingState {
    pub(crate) fn is_idle(&self) -> bool {
        self.prefix.is_empty() && self.error.is_none() && self.additional_info.is_none()
    }

    /// Last write wins per key.
    pub(crate) fn merge_info<I, K, V>(&mut self, info: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let map = self.additional_info.get_or_insert_with(Map::new);
        for (key, value) in info {
            map.insert(key.into(), value.into());
        }
    }

    pub(crate) fn capture(&mut self, err: anyhow::Error) {
        self.error = Some(err);
    }

    pub(crate) fn set_prefix(&mut self, prefix: String) {
        self.prefix = prefix;
    }

    pub(crate) fn apply_prefix(&self, message: String) -> String {
        if self.prefix.is_empty() {
            message
        } else {
            format!("{} {}", self.prefix, message)
        }
    }

    /// Final `additionalInfo` value: the merged map plus the rendered error
    /// under `stackTrace`. `None` when there is nothing to attach.
    pub(crate) fn into_additional_info(self) -> Option<Map<String, Value>> {
        let mut info = self.additional_info;

        if let Some(err) = self.error {
            info.get_or_insert_with(Map::new).insert(
                fields::STACK_TRACE.to_string(),
                Value::String(render_error(&err)),
            );
        }

        info.filter(|map| !map.is_empty())
    }
}

/// Message, cause chain and (when captured) backtrace.
pub(crate) fn render_error(err: &anyhow::Error) -> String {
    format!("{:?}", err)
}
