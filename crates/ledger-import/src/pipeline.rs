//! The import pass over the source sheet.
//!
//! Two phases with a seam between them:
//! 1. **Plan**: filter selected rows, transform, drop duplicates, collect
//!    one notification request per accepted row in source order.
//! 2. **Commit**: splice accepted rows into the ledger, re-sort the whole
//!    table by student id, renumber every row from 1.
//!
//! The seam lets callers inspect or report a plan without mutating anything
//! (dry runs), and keeps notification dispatch independent of the table
//! write, so a failed email can never roll back committed rows.

use tracing::{debug, warn};

use ledger_model::{CompletedCredit, NotificationRequest, SourceRecord};

use crate::dedupe::DedupIndex;
use crate::transform::to_completed_credit;

/// Outcome of the planning phase.
#[derive(Debug, Default)]
pub struct ImportPlan {
    /// Accepted rows, sorted by student name case-insensitively.
    pub accepted: Vec<CompletedCredit>,
    /// One request per accepted row, in original source-row order.
    pub notifications: Vec<NotificationRequest>,
    /// Count of source rows with the import checkbox set.
    pub selected: usize,
    /// Count of selected rows skipped as already present.
    pub duplicates: usize,
    /// Messages for selected rows skipped as malformed.
    pub malformed: Vec<String>,
}

/// Case-insensitive ordering key for names and ids.
pub fn sort_key(value: &str) -> String {
    value.to_lowercase()
}

/// Plan an import of `source` against the `existing` ledger rows.
///
/// Within one batch the first occurrence of a `(student id, course)` pair
/// is canonical; later occurrences count as duplicates and get no
/// notification.
pub fn plan(source: &[SourceRecord], existing: &[CompletedCredit]) -> ImportPlan {
    let mut index = DedupIndex::from_records(existing);
    let mut result = ImportPlan::default();
    for (row_idx, record) in source.iter().enumerate() {
        // Counts data records, not physical sheet rows; ingest drops blank
        // rows before they get here, so line arithmetic would drift.
        let record_no = row_idx + 1;
        if !record.selected {
            continue;
        }
        result.selected += 1;
        if let Some(field) = record.missing_required() {
            warn!(record_no, field, "skipping malformed source row");
            result.malformed.push(format!("record {record_no}: missing {field}"));
            continue;
        }
        let credit = to_completed_credit(record);
        if !index.insert(credit.key()) {
            debug!(
                record_no,
                student_id = %credit.student_id,
                course = %credit.course_name,
                "skipping duplicate"
            );
            result.duplicates += 1;
            continue;
        }
        result.notifications.push(NotificationRequest {
            student_name: record.student_name.clone(),
            student_id: credit.student_id.clone(),
            course_name: credit.course_name.clone(),
        });
        result.accepted.push(credit);
    }
    result
        .accepted
        .sort_by(|a, b| sort_key(&a.student_name).cmp(&sort_key(&b.student_name)));
    result
}

/// Commit accepted rows into the ledger.
///
/// The full-table stable sort by student id is the authoritative final
/// order; placement of individual insertions does not matter. Every row is
/// renumbered from 1 on every commit, not just the new ones.
pub fn commit(
    mut ledger: Vec<CompletedCredit>,
    accepted: Vec<CompletedCredit>,
) -> Vec<CompletedCredit> {
    ledger.extend(accepted);
    ledger.sort_by(|a, b| sort_key(&a.student_id).cmp(&sort_key(&b.student_id)));
    for (idx, credit) in ledger.iter_mut().enumerate() {
        credit.row_number = idx + 1;
    }
    ledger
}
