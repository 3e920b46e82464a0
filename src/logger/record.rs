//! Log record structure and fixed-key JSON encoding

use super::field::Field;
use super::level::Level;
use chrono::Local;
use serde::{Deserialize, Serialize};

/// Timestamp pattern for the `time` key. Human-readable, local time.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One log record, encoded as a single-line JSON object.
///
/// Fixed keys appear in declaration order; `logger`, `caller`, `function`
/// and `stacktrace` are omitted entirely when absent. Caller-supplied
/// fields follow the fixed keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logger: Option<String>,
    pub level: Level,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caller: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacktrace: Option<String>,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Record {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            time: Local::now().format(TIME_FORMAT).to_string(),
            logger: None,
            level,
            caller: None,
            message: message.into(),
            function: None,
            stacktrace: None,
            fields: serde_json::Map::new(),
        }
    }

    pub fn with_logger(mut self, name: impl Into<String>) -> Self {
        self.logger = Some(name.into());
        self
    }

    pub fn with_caller(mut self, file: &str, line: u32) -> Self {
        self.caller = Some(format!("{}:{}", file, line));
        self
    }

    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    pub fn with_stacktrace(mut self, stacktrace: impl Into<String>) -> Self {
        self.stacktrace = Some(stacktrace.into());
        self
    }

    /// Append structured fields. Skip fields are dropped; a repeated key
    /// overwrites the earlier value.
    pub fn with_fields<'a>(mut self, fields: impl IntoIterator<Item = &'a Field>) -> Self {
        for field in fields {
            if field.is_skip() {
                continue;
            }
            self.fields.insert(field.key.clone(), field.value.clone());
        }
        self
    }

    /// Serialize to a single-line JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
