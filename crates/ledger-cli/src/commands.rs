use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use ledger_import::{commit, plan};
use ledger_ingest::{
    ledger_records, ledger_table, read_sheet, read_sheet_or_empty, source_records, write_sheet,
};
use ledger_model::LEDGER_HEADERS;
use ledger_notify::{DispatchReport, FileOutbox, dispatch, load_routing_table};

use crate::cli::{ImportArgs, RoutesArgs};
use crate::summary::apply_table_style;
use crate::types::ImportResult;

pub fn run_routes(args: &RoutesArgs) -> Result<()> {
    let table = load_routing_table(args.routing.as_deref()).context("load routing table")?;
    let mut out = Table::new();
    out.set_header(vec!["Range", "Group", "Email"]);
    apply_table_style(&mut out);
    for range in &table.ranges {
        out.add_row(vec![
            format!("{}-{}", range.start, range.end),
            range.group.clone(),
            range.email.clone(),
        ]);
    }
    out.add_row(vec![
        "(other)".to_string(),
        table.default.group.clone(),
        table.default.email.clone(),
    ]);
    println!("{out}");
    println!("Sender: {}", table.sender.from_header());
    Ok(())
}

pub fn run_import(args: &ImportArgs) -> Result<ImportResult> {
    let import_span = info_span!(
        "import",
        source = %args.source.display(),
        ledger = %args.ledger.display()
    );
    let _import_guard = import_span.enter();

    // Resolved up front so a broken table aborts before any mutation.
    let routing = load_routing_table(args.routing.as_deref()).context("load routing table")?;

    // =========================================================================
    // Stage 1: Ingest - read both sheets
    // =========================================================================
    let ingest_start = Instant::now();
    let (source_rows, existing) = info_span!("ingest").in_scope(|| -> Result<_> {
        let source_sheet = read_sheet(&args.source).context("read source sheet")?;
        let ledger_sheet =
            read_sheet_or_empty(&args.ledger, &LEDGER_HEADERS).context("read ledger sheet")?;
        Ok((source_records(&source_sheet), ledger_records(&ledger_sheet)))
    })?;
    info!(
        source_rows = source_rows.len(),
        ledger_rows = existing.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // =========================================================================
    // Stage 2: Plan - select, transform, dedupe
    // =========================================================================
    let plan_start = Instant::now();
    let planned = info_span!("plan").in_scope(|| plan(&source_rows, &existing));
    info!(
        selected = planned.selected,
        accepted = planned.accepted.len(),
        duplicates = planned.duplicates,
        malformed = planned.malformed.len(),
        duration_ms = plan_start.elapsed().as_millis(),
        "plan complete"
    );
    let imported = planned.accepted.len();

    // =========================================================================
    // Stage 3: Commit - splice, sort, renumber, write back
    // =========================================================================
    let commit_start = Instant::now();
    let committed = info_span!("commit").in_scope(|| commit(existing, planned.accepted));
    let ledger_rows = committed.len();
    if !args.dry_run {
        info_span!("write")
            .in_scope(|| write_sheet(&args.ledger, &ledger_table(&committed)))
            .context("write ledger sheet")?;
    }
    info!(
        ledger_rows,
        dry_run = args.dry_run,
        duration_ms = commit_start.elapsed().as_millis(),
        "commit complete"
    );

    // =========================================================================
    // Stage 4: Notify - one message per imported row, in source order
    // =========================================================================
    let outbox_dir = outbox_dir(args);
    let report = if args.dry_run {
        DispatchReport::default()
    } else {
        let notify_start = Instant::now();
        let mut outbox = FileOutbox::new(&outbox_dir).context("open outbox")?;
        let report = info_span!("notify")
            .in_scope(|| dispatch(&routing, &mut outbox, &planned.notifications));
        info!(
            sent = report.sent,
            failed = report.failures.len(),
            outbox = %outbox_dir.display(),
            duration_ms = notify_start.elapsed().as_millis(),
            "notify complete"
        );
        report
    };

    let errors = report.failures;
    let has_errors = !errors.is_empty();
    Ok(ImportResult {
        source: args.source.clone(),
        ledger: args.ledger.clone(),
        outbox: (!args.dry_run).then_some(outbox_dir),
        dry_run: args.dry_run,
        selected: planned.selected,
        imported,
        duplicates: planned.duplicates,
        malformed: planned.malformed,
        ledger_rows,
        notifications_sent: report.sent,
        errors,
        has_errors,
    })
}

fn outbox_dir(args: &ImportArgs) -> PathBuf {
    args.outbox.clone().unwrap_or_else(|| {
        args.ledger
            .parent()
            .map(|dir| dir.join("outbox"))
            .unwrap_or_else(|| PathBuf::from("outbox"))
    })
}
