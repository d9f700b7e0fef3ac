use solana_clock::{Slot, UnixTimestamp};

/// Height and consensus time of the block being processed.
///
/// `time` is the only clock the hooks ever read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockContext {
    pub height: Slot,
    pub time: UnixTimestamp,
}

impl BlockContext {
    pub const fn new(height: Slot, time: UnixTimestamp) -> Self {
        Self { height, time }
    }
}

/// Which pass over a transaction is running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecMode {
    /// Mempool admission.
    #[default]
    Check,
    /// Re-admission of a mempool transaction after a block commit.
    ReCheck,
    /// Execution inside a block.
    Deliver,
}

/// Per-transaction context threaded through the admission pipeline.
///
/// Gates may return a modified copy; the fee and sequence fields are set by
/// the external stages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxContext {
    pub block: BlockContext,
    pub mode: ExecMode,
    pub gas_limit: u64,
    pub priority: i64,
    pub fee_deducted: u64,
    pub sequence_incremented: bool,
}

impl TxContext {
    pub fn new(block: BlockContext, mode: ExecMode) -> Self {
        Self {
            block,
            mode,
            ..Self::default()
        }
    }

    pub fn is_check_tx(&self) -> bool {
        matches!(self.mode, ExecMode::Check | ExecMode::ReCheck)
    }

    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = gas_limit;
        self
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }
}
