//! Counselor routing table types.
//!
//! The table is data, not code: it deserializes from a TOML document so a
//! substitute table (for example, one routing every group to a single test
//! inbox) can be swapped in without touching the program.

use serde::Deserialize;

use crate::error::{LedgerError, Result};

/// One alphabetical range of last-name prefixes handled by a counselor.
///
/// `start` and `end` are inclusive two-letter upper-case bounds compared
/// lexicographically. Gaps between ranges are intentional and fall to the
/// default counselor; they must not be closed up.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CounselorRange {
    pub start: String,
    pub end: String,
    pub group: String,
    pub email: String,
}

/// Catch-all recipient for prefixes outside every range.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DefaultCounselor {
    pub group: String,
    pub email: String,
}

/// Fixed sender identity for outgoing notifications.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SenderBlock {
    /// Sender addresses, rendered comma-joined in the `From` header.
    pub from: Vec<String>,
    /// Signature line closing the message body.
    pub signature: String,
}

impl SenderBlock {
    pub fn from_header(&self) -> String {
        self.from.join(", ")
    }
}

/// Ordered counselor assignment table plus sender identity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RoutingTable {
    #[serde(rename = "range")]
    pub ranges: Vec<CounselorRange>,
    pub default: DefaultCounselor,
    pub sender: SenderBlock,
}

/// A resolved recipient borrowed from the routing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipient<'a> {
    pub group: &'a str,
    pub email: &'a str,
}

impl RoutingTable {
    /// Check structural soundness: at least one range, two-character
    /// upper-case bounds in order, and no empty addresses.
    pub fn validate(&self) -> Result<()> {
        if self.ranges.is_empty() {
            return Err(LedgerError::Routing("no counselor ranges".to_string()));
        }
        for range in &self.ranges {
            for bound in [&range.start, &range.end] {
                if bound.chars().count() != 2 || bound.chars().any(|ch| !ch.is_ascii_uppercase()) {
                    return Err(LedgerError::Routing(format!(
                        "range bound {bound:?} for {:?} is not two upper-case letters",
                        range.group
                    )));
                }
            }
            if range.start > range.end {
                return Err(LedgerError::Routing(format!(
                    "range {}-{} for {:?} is inverted",
                    range.start, range.end, range.group
                )));
            }
            if range.email.trim().is_empty() {
                return Err(LedgerError::Routing(format!(
                    "empty email for {:?}",
                    range.group
                )));
            }
        }
        if self.default.email.trim().is_empty() {
            return Err(LedgerError::Routing(
                "empty email for default counselor".to_string(),
            ));
        }
        if self.sender.from.is_empty() {
            return Err(LedgerError::Routing("no sender addresses".to_string()));
        }
        Ok(())
    }

    pub fn default_recipient(&self) -> Recipient<'_> {
        Recipient {
            group: &self.default.group,
            email: &self.default.email,
        }
    }
}
