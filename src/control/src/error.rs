use thiserror::Error;

use crate::state::ValueKind;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum PushError {
    // force_push arrived as something other than a JSON boolean
    #[error("force_push must be a boolean value")]
    InvalidArgument,

    // tariff_change is present but neither an object nor an array
    #[error("tariff_change must be a mapping, sequence, or None")]
    TypeMismatch { found: ValueKind },
}
