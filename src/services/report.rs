use crate::domain::models::CheckResult;
use parking_lot::Mutex;

/// Append-only list of findings for one run. Appends are serialized, so the
/// recorded order is the order in which findings were made.
#[derive(Debug, Default)]
pub struct Inconsistencies {
    entries: Mutex<Vec<String>>,
}

impl Inconsistencies {
    pub fn record(&self, msg: impl Into<String>) {
        self.entries.lock().push(msg.into());
    }

    pub fn into_result(self) -> CheckResult {
        let inconsistencies = self.entries.into_inner();
        CheckResult {
            success: inconsistencies.is_empty(),
            inconsistencies,
        }
    }
}
