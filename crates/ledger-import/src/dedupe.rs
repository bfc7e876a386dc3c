use std::collections::BTreeSet;

use ledger_model::{CompletedCredit, CreditKey};

/// Membership index over `(student id, course name)` pairs.
///
/// Course names compare case-insensitively; student ids compare by their
/// stored string representation. Accepted keys are inserted as the batch
/// progresses so duplicates inside a single import are rejected too.
#[derive(Debug, Default)]
pub struct DedupIndex {
    keys: BTreeSet<CreditKey>,
}

impl DedupIndex {
    pub fn from_records(records: &[CompletedCredit]) -> Self {
        Self {
            keys: records.iter().map(CompletedCredit::key).collect(),
        }
    }

    pub fn contains(&self, key: &CreditKey) -> bool {
        self.keys.contains(key)
    }

    /// Returns false when the key was already present.
    pub fn insert(&mut self, key: CreditKey) -> bool {
        self.keys.insert(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
