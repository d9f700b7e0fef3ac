//! # Hook metrics
//!
//! Counters and gauges for the three block hooks:
//! - **admission**: admitted transactions, rejections by reason code
//! - **settlement**: units transferred, deferred blocks, swept amount, dust
//! - **auto-execution**: executions succeeded, failed and deferred
//!
//! ## Usage
//!
//! ```rust
//! use vrn_monitoring::HookMetrics;
//!
//! let metrics = HookMetrics::new();
//! metrics.tx_rejected.inc(4);
//! metrics.yield_transferred.add(1);
//! metrics.dust_nano_units.set(21_940_832);
//!
//! let text = vrn_monitoring::prometheus::encode(&metrics.snapshot());
//! assert!(text.contains("vrn_yield_transferred_total 1"));
//! ```

pub mod prometheus;

use {
    parking_lot::Mutex,
    std::{
        collections::BTreeMap,
        sync::atomic::{AtomicI64, AtomicU64, Ordering},
    },
};

// ---------------------------------------------------------------------------
// Metric primitives
// ---------------------------------------------------------------------------

/// A monotonically increasing counter.
pub struct Counter {
    value: AtomicU64,
    name: &'static str,
    help: &'static str,
}

impl Counter {
    pub const fn new(name: &'static str, help: &'static str) -> Self {
        Self {
            value: AtomicU64::new(0),
            name,
            help,
        }
    }

    pub fn inc(&self) {
        self.value.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add(&self, v: u64) {
        self.value.fetch_add(v, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn help(&self) -> &'static str {
        self.help
    }
}

/// A gauge that can go up or down.
pub struct Gauge {
    value: AtomicI64,
    name: &'static str,
    help: &'static str,
}

impl Gauge {
    pub const fn new(name: &'static str, help: &'static str) -> Self {
        Self {
            value: AtomicI64::new(0),
            name,
            help,
        }
    }

    pub fn set(&self, v: i64) {
        self.value.store(v, Ordering::Relaxed);
    }

    pub fn get(&self) -> i64 {
        self.value.load(Ordering::Relaxed)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn help(&self) -> &'static str {
        self.help
    }
}

/// A counter partitioned by one numeric label.
pub struct LabeledCounter {
    values: Mutex<BTreeMap<u32, u64>>,
    name: &'static str,
    label: &'static str,
    help: &'static str,
}

impl LabeledCounter {
    pub const fn new(name: &'static str, label: &'static str, help: &'static str) -> Self {
        Self {
            values: Mutex::new(BTreeMap::new()),
            name,
            label,
            help,
        }
    }

    pub fn inc(&self, label_value: u32) {
        let mut values = self.values.lock();
        let value = values.entry(label_value).or_default();
        *value = value.saturating_add(1);
    }

    pub fn get(&self, label_value: u32) -> u64 {
        self.values.lock().get(&label_value).copied().unwrap_or_default()
    }

    pub fn total(&self) -> u64 {
        self.values
            .lock()
            .values()
            .fold(0u64, |acc, v| acc.saturating_add(*v))
    }

    /// `(label value, count)` pairs in ascending label order.
    pub fn get_all(&self) -> Vec<(u32, u64)> {
        self.values
            .lock()
            .iter()
            .map(|(label, value)| (*label, *value))
            .collect()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn help(&self) -> &'static str {
        self.help
    }
}

// ---------------------------------------------------------------------------
// Hook metrics
// ---------------------------------------------------------------------------

pub struct HookMetrics {
    // -- Admission --
    pub tx_admitted: Counter,
    pub tx_rejected: LabeledCounter,

    // -- Settlement --
    pub settlement_height: Gauge,
    pub yield_transferred: Counter,
    pub yield_deferred_blocks: Counter,
    pub yield_pool_swept: Counter,
    pub dust_nano_units: Gauge,

    // -- Auto-execution --
    pub proposals_scanned: Gauge,
    pub proposals_executed: Counter,
    pub proposals_failed: Counter,
    pub proposals_deferred: Counter,
    pub proposal_listing_failures: Counter,
}

impl Default for HookMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl HookMetrics {
    pub fn new() -> Self {
        Self {
            tx_admitted: Counter::new(
                "vrn_tx_admitted_total",
                "Transactions that passed the admission pipeline",
            ),
            tx_rejected: LabeledCounter::new(
                "vrn_tx_rejected_total",
                "code",
                "Transactions rejected by the admission pipeline, by reason code",
            ),

            settlement_height: Gauge::new(
                "vrn_settlement_height",
                "Height of the last settled block",
            ),
            yield_transferred: Counter::new(
                "vrn_yield_transferred_total",
                "Whole units moved from the yield pool to the trust deposit",
            ),
            yield_deferred_blocks: Counter::new(
                "vrn_yield_deferred_blocks_total",
                "Blocks whose due yield transfer was deferred for lack of yield pool funds",
            ),
            yield_pool_swept: Counter::new(
                "vrn_yield_pool_swept_total",
                "Units returned from the yield pool to the community pool",
            ),
            dust_nano_units: Gauge::new(
                "vrn_trust_deposit_dust_nano_units",
                "Pending sub-unit yield in units of 1e-9",
            ),

            proposals_scanned: Gauge::new(
                "vrn_proposals_scanned",
                "Proposals visited by the last auto-execution scan",
            ),
            proposals_executed: Counter::new(
                "vrn_proposals_executed_total",
                "Proposals executed successfully by the auto-executor",
            ),
            proposals_failed: Counter::new(
                "vrn_proposals_failed_total",
                "Auto-executed proposals that failed or returned an error",
            ),
            proposals_deferred: Counter::new(
                "vrn_proposals_deferred_total",
                "Eligible proposals left for a later block by the per-block cap",
            ),
            proposal_listing_failures: Counter::new(
                "vrn_proposal_listing_failures_total",
                "Group, policy or proposal listings that failed during an auto-execution scan",
            ),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            tx_admitted: self.tx_admitted.get(),
            tx_rejected_by_code: self.tx_rejected.get_all(),
            settlement_height: self.settlement_height.get(),
            yield_transferred: self.yield_transferred.get(),
            yield_deferred_blocks: self.yield_deferred_blocks.get(),
            yield_pool_swept: self.yield_pool_swept.get(),
            dust_nano_units: self.dust_nano_units.get(),
            proposals_scanned: self.proposals_scanned.get(),
            proposals_executed: self.proposals_executed.get(),
            proposals_failed: self.proposals_failed.get(),
            proposals_deferred: self.proposals_deferred.get(),
            proposal_listing_failures: self.proposal_listing_failures.get(),
        }
    }
}

/// Point-in-time copy of [`HookMetrics`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub tx_admitted: u64,
    pub tx_rejected_by_code: Vec<(u32, u64)>,
    pub settlement_height: i64,
    pub yield_transferred: u64,
    pub yield_deferred_blocks: u64,
    pub yield_pool_swept: u64,
    pub dust_nano_units: i64,
    pub proposals_scanned: i64,
    pub proposals_executed: u64,
    pub proposals_failed: u64,
    pub proposals_deferred: u64,
    pub proposal_listing_failures: u64,
}
