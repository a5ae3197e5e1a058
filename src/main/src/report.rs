use anyhow::Result;
use serde::Serialize;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use control::{PushDecision, PushReason, TariffChange};

#[derive(Debug, Clone, Serialize)]
pub struct PushReport {
    pub should_push: bool,
    pub reason: PushReason,
    // Entry count of the diff, null when no diff was computed
    pub change_entries: Option<usize>,
    // RFC 3339, UTC
    pub evaluated_at: String,
}

impl PushReport {
    pub fn new(
        decision: PushDecision,
        change: &TariffChange,
        evaluated_at: OffsetDateTime,
    ) -> Result<PushReport> {
        Ok(PushReport {
            should_push: decision.should_push,
            reason: decision.reason,
            change_entries: change.len(),
            evaluated_at: evaluated_at.format(&Rfc3339)?,
        })
    }

    pub fn summary(&self) -> String {
        let action = if self.should_push { "push" } else { "skip" };
        format!("{}: {}", action, self.reason)
    }
}
