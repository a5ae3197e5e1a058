use core::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

// JSON kind of a diff value the evaluator cannot classify
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Boolean,
    Number,
    String,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Diff between two tariff pricing configurations
#[derive(Debug, PartialEq, Clone, Default)]
pub enum TariffChange {
    // No diff was computed
    #[default]
    Absent,
    Mapping(Map<String, Value>),
    // Text is never a sequence, it lands in Unsupported
    Sequence(Vec<Value>),
    Unsupported(ValueKind),
}

impl TariffChange {
    /// Number of entries in the diff, or `None` when there is nothing to count.
    pub fn len(&self) -> Option<usize> {
        match self {
            TariffChange::Mapping(entries) => Some(entries.len()),
            TariffChange::Sequence(elements) => Some(elements.len()),
            TariffChange::Absent | TariffChange::Unsupported(_) => None,
        }
    }

    pub fn is_empty(&self) -> Option<bool> {
        self.len().map(|len| len == 0)
    }
}

impl From<Value> for TariffChange {
    fn from(value: Value) -> TariffChange {
        match value {
            Value::Null => TariffChange::Absent,
            Value::Object(entries) => TariffChange::Mapping(entries),
            Value::Array(elements) => TariffChange::Sequence(elements),
            Value::Bool(_) => TariffChange::Unsupported(ValueKind::Boolean),
            Value::Number(_) => TariffChange::Unsupported(ValueKind::Number),
            Value::String(_) => TariffChange::Unsupported(ValueKind::String),
        }
    }
}

impl From<Option<Value>> for TariffChange {
    fn from(value: Option<Value>) -> TariffChange {
        value.map(TariffChange::from).unwrap_or_default()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PushReason {
    Changed,
    Forced,
    Unchanged,
}

impl PushReason {
    pub fn as_str(self) -> &'static str {
        match self {
            PushReason::Changed => "changed",
            PushReason::Forced => "forced",
            PushReason::Unchanged => "unchanged",
        }
    }
}

impl fmt::Display for PushReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct PushDecision {
    pub should_push: bool,
    pub reason: PushReason,
}

impl PushDecision {
    pub fn new(should_push: bool, reason: PushReason) -> Self {
        Self {
            should_push,
            reason,
        }
    }
}

impl From<PushDecision> for (bool, PushReason) {
    fn from(decision: PushDecision) -> (bool, PushReason) {
        (decision.should_push, decision.reason)
    }
}
