//! Prometheus text format exporter for the hook metrics.
//!
//! Encodes a [`MetricsSnapshot`] into the [Prometheus exposition format](https://prometheus.io/docs/instrumenting/exposition_formats/)
//! (text/plain; version=0.0.4).

use {crate::MetricsSnapshot, std::fmt::Write};

/// Encode a metrics snapshot into Prometheus text exposition format.
pub fn encode(snap: &MetricsSnapshot) -> String {
    let mut out = String::with_capacity(2048);

    // -----------------------------------------------------------------------
    // Admission
    // -----------------------------------------------------------------------
    write_counter(&mut out, "vrn_tx_admitted_total",
        "Transactions that passed the admission pipeline", snap.tx_admitted);

    write_labeled_counter(&mut out, "vrn_tx_rejected_total", "code",
        "Transactions rejected by the admission pipeline, by reason code",
        &snap.tx_rejected_by_code);

    // -----------------------------------------------------------------------
    // Settlement
    // -----------------------------------------------------------------------
    write_gauge(&mut out, "vrn_settlement_height",
        "Height of the last settled block", snap.settlement_height);

    write_counter(&mut out, "vrn_yield_transferred_total",
        "Whole units moved from the yield pool to the trust deposit",
        snap.yield_transferred);

    write_counter(&mut out, "vrn_yield_deferred_blocks_total",
        "Blocks whose due yield transfer was deferred for lack of yield pool funds",
        snap.yield_deferred_blocks);

    write_counter(&mut out, "vrn_yield_pool_swept_total",
        "Units returned from the yield pool to the community pool",
        snap.yield_pool_swept);

    write_gauge(&mut out, "vrn_trust_deposit_dust_nano_units",
        "Pending sub-unit yield in units of 1e-9", snap.dust_nano_units);

    // -----------------------------------------------------------------------
    // Auto-execution
    // -----------------------------------------------------------------------
    write_gauge(&mut out, "vrn_proposals_scanned",
        "Proposals visited by the last auto-execution scan", snap.proposals_scanned);

    write_counter(&mut out, "vrn_proposals_executed_total",
        "Proposals executed successfully by the auto-executor",
        snap.proposals_executed);

    write_counter(&mut out, "vrn_proposals_failed_total",
        "Auto-executed proposals that failed or returned an error",
        snap.proposals_failed);

    write_counter(&mut out, "vrn_proposals_deferred_total",
        "Eligible proposals left for a later block by the per-block cap",
        snap.proposals_deferred);

    write_counter(&mut out, "vrn_proposal_listing_failures_total",
        "Group, policy or proposal listings that failed during an auto-execution scan",
        snap.proposal_listing_failures);

    out
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

// Writing into a `String` cannot fail.
fn write_counter(out: &mut String, name: &str, help: &str, value: u64) {
    let _ = writeln!(out, "# HELP {name} {help}");
    let _ = writeln!(out, "# TYPE {name} counter");
    let _ = writeln!(out, "{name} {value}\n");
}

fn write_gauge(out: &mut String, name: &str, help: &str, value: i64) {
    let _ = writeln!(out, "# HELP {name} {help}");
    let _ = writeln!(out, "# TYPE {name} gauge");
    let _ = writeln!(out, "{name} {value}\n");
}

fn write_labeled_counter(
    out: &mut String,
    name: &str,
    label: &str,
    help: &str,
    values: &[(u32, u64)],
) {
    let _ = writeln!(out, "# HELP {name} {help}");
    let _ = writeln!(out, "# TYPE {name} counter");
    for (label_value, value) in values {
        let _ = writeln!(out, "{name}{{{label}=\"{label_value}\"}} {value}");
    }
    out.push('\n');
}
