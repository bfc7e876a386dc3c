use std::path::PathBuf;

/// Everything the summary needs to report one import run.
#[derive(Debug)]
pub struct ImportResult {
    pub source: PathBuf,
    pub ledger: PathBuf,
    pub outbox: Option<PathBuf>,
    pub dry_run: bool,
    /// Source rows with the import checkbox set.
    pub selected: usize,
    /// Rows accepted into the ledger this run.
    pub imported: usize,
    /// Selected rows skipped because their key already exists.
    pub duplicates: usize,
    /// Messages for selected rows skipped as malformed.
    pub malformed: Vec<String>,
    /// Ledger row count after the commit.
    pub ledger_rows: usize,
    pub notifications_sent: usize,
    pub errors: Vec<String>,
    pub has_errors: bool,
}
