pub mod error;
pub mod record;
pub mod routing;

pub use error::{LedgerError, Result};
pub use record::{
    CompletedCredit, CreditKey, LEDGER_COLUMNS, LEDGER_HEADERS, NotificationRequest, SOURCE_COLUMNS,
    SourceRecord, is_checked,
};
pub use routing::{CounselorRange, DefaultCounselor, Recipient, RoutingTable, SenderBlock};
