//! Range lookup from a student name to the responsible counselor.

use ledger_model::{Recipient, RoutingTable};

/// Walks the ordered counselor ranges for a two-letter last-name prefix.
#[derive(Debug, Clone, Copy)]
pub struct Router<'a> {
    table: &'a RoutingTable,
}

impl<'a> Router<'a> {
    pub fn new(table: &'a RoutingTable) -> Self {
        Self { table }
    }

    /// Resolve the recipient for a "Last, First" student name.
    ///
    /// The prefix is the first two characters of the part before the first
    /// comma, trimmed and upper-cased; a name with no comma is used whole.
    /// Names shorter than two characters sort before every range and fall
    /// to the default counselor. Never an error.
    pub fn route(&self, person_name: &str) -> Recipient<'a> {
        let Some(prefix) = name_prefix(person_name) else {
            return self.table.default_recipient();
        };
        for range in &self.table.ranges {
            if prefix.as_str() >= range.start.as_str() && prefix.as_str() <= range.end.as_str() {
                return Recipient {
                    group: &range.group,
                    email: &range.email,
                };
            }
        }
        self.table.default_recipient()
    }
}

fn name_prefix(person_name: &str) -> Option<String> {
    let last_name = person_name.split(',').next().unwrap_or("").trim();
    let mut chars = last_name.chars();
    let first = chars.next()?;
    let second = chars.next()?;
    // Uppercasing can expand a character ('ß' becomes "SS"); the prefix
    // stays exactly two characters regardless.
    Some(
        first
            .to_uppercase()
            .chain(second.to_uppercase())
            .take(2)
            .collect(),
    )
}
