mod error;
mod state;

use serde_json::Value;

pub use error::PushError;
pub use state::{PushDecision, PushReason, TariffChange, ValueKind};

pub fn force_push_from_value(value: &Value) -> Result<bool, PushError> {
    match value {
        Value::Bool(force_push) => Ok(*force_push),
        _ => Err(PushError::InvalidArgument),
    }
}

/// Decide whether a tariff update should be pushed to the device.
///
/// A non-empty diff always reports `Changed`, even when the push is forced.
pub fn evaluate(force_push: bool, change: &TariffChange) -> Result<PushDecision, PushError> {
    let is_empty = match change {
        TariffChange::Absent => {
            let reason = if force_push {
                PushReason::Forced
            } else {
                PushReason::Unchanged
            };
            return Ok(PushDecision::new(force_push, reason));
        }
        TariffChange::Mapping(entries) => entries.is_empty(),
        TariffChange::Sequence(elements) => elements.is_empty(),
        TariffChange::Unsupported(found) => {
            return Err(PushError::TypeMismatch { found: *found });
        }
    };

    if !is_empty {
        return Ok(PushDecision::new(true, PushReason::Changed));
    }

    if force_push {
        return Ok(PushDecision::new(true, PushReason::Forced));
    }

    Ok(PushDecision::new(false, PushReason::Unchanged))
}

/// Same as [`evaluate`], for loosely typed input such as a decoded request.
///
/// The force flag is validated before the diff is looked at.
pub fn evaluate_value(force_push: &Value, change: Value) -> Result<PushDecision, PushError> {
    let force_push = force_push_from_value(force_push)?;
    evaluate(force_push, &TariffChange::from(change))
}
