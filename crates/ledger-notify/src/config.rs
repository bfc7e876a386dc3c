//! Routing-table configuration.
//!
//! Resolution order: an explicit path beats the `LEDGER_ROUTING`
//! environment variable, which beats the bundled production table. The env
//! hook exists so a test-mode table routing every group to a single inbox
//! can be selected without editing anything.

use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use ledger_model::RoutingTable;

pub const ROUTING_ENV: &str = "LEDGER_ROUTING";

const DEFAULT_TABLE: &str = include_str!("../data/counselors.toml");

/// The bundled production counselor table.
pub fn default_routing_table() -> Result<RoutingTable> {
    parse_table(DEFAULT_TABLE).context("bundled counselor table")
}

/// Load and validate the active routing table.
pub fn load_routing_table(explicit: Option<&Path>) -> Result<RoutingTable> {
    if let Some(path) = explicit {
        info!(path = %path.display(), "loading routing table");
        return read_table(path);
    }
    if let Ok(path) = env::var(ROUTING_ENV) {
        let path = path.trim();
        if !path.is_empty() {
            info!(path, source = ROUTING_ENV, "loading routing table");
            return read_table(Path::new(path));
        }
    }
    default_routing_table()
}

fn read_table(path: &Path) -> Result<RoutingTable> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read routing table: {}", path.display()))?;
    parse_table(&text).with_context(|| format!("routing table: {}", path.display()))
}

fn parse_table(text: &str) -> Result<RoutingTable> {
    let table: RoutingTable = toml::from_str(text).context("parse routing table")?;
    table.validate().context("validate routing table")?;
    Ok(table)
}
