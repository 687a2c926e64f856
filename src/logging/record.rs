//! The structured record handed to a sink.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use super::fields;
use super::level::Level;

/// One emission, as seen by a sink.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
    /// `correlationId`, `additionalInfo` and any other bound fields.
    pub fields: Map<String, Value>,
    pub timestamp: DateTime<Utc>,
}

/// Keys owned by the line itself; bound fields with these names are dropped.
const LINE_KEYS: [&str; 3] = [fields::LEVEL, fields::TIME, fields::MESSAGE];

#[derive(Serialize)]
struct JsonLine<'a> {
    level: &'a str,
    time: String,
    #[serde(flatten)]
    fields: &'a Map<String, Value>,
    message: &'a str,
}

impl LogRecord {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            fields: Map::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn with_fields(mut self, fields: Map<String, Value>) -> Self {
        self.fields = fields;
        self
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn correlation_id(&self) -> Option<&str> {
        self.fields.get(fields::CORRELATION_ID).and_then(|v| v.as_str())
    }

    pub fn additional_info(&self) -> Option<&Map<String, Value>> {
        self.fields
            .get(fields::ADDITIONAL_INFO)
            .and_then(|v| v.as_object())
    }

    /// Render as a single JSON object:
    /// `{"level":..,"time":..,<fields>,"message":..}`.
    pub fn to_json_line(&self) -> String {
        let filtered: Map<String, Value>;
        let extra = if LINE_KEYS.iter().any(|key| self.fields.contains_key(*key)) {
            filtered = self
                .fields
                .iter()
                .filter(|(key, _)| !LINE_KEYS.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            &filtered
        } else {
            &self.fields
        };

        let line = JsonLine {
            level: self.level.label(),
            time: self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            fields: extra,
            message: &self.message,
        };

        serde_json::to_string(&line).unwrap_or_else(|e| {
            format!(
                "{{\"{}\":\"{}\",\"{}\":{:?}}}",
                fields::LEVEL,
                self.level.label(),
                fields::MESSAGE,
                format!("unserializable record: {}", e)
            )
        })
    }
}
