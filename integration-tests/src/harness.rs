//! Verana Test Chain
//!
//! A deterministic chain simulator for integration-testing the hooks. Each
//! call to [`TestChain::next_block`] advances height and block time, then
//! runs `begin_block` (settlement) and `end_block` (auto-execution) against
//! the in-memory collaborators.
//!
//! There is no consensus and no transaction execution: admission is tested
//! through [`TestChain::check_tx`], and message effects are applied directly
//! through the module keepers.

use {
    solana_clock::{Slot, UnixTimestamp},
    vrn_ante::{decorator_fn, AnteDecorator, AnteError, Next},
    vrn_app::{App, AppConfig, AppError, AppGenesis, ExternalDecorators},
    vrn_group_autoexec::ExecutionReport,
    vrn_interface::{
        testing::{MemBank, MemGroupKeeper, MemStore},
        Address, BlockContext, ExecMode, ExecutorResult, GroupKeeper, Proposal, ProposalStatus, Tx,
        TxContext,
    },
    vrn_math::Dec,
    vrn_trust_deposit::{ModuleAccounts, Params, SettlementReport},
    vrn_validator_registry::MsgOnboardValidator,
};

// ─── Constants ───────────────────────────────────────────────────────────────

/// Seconds between consecutive blocks.
pub const BLOCK_TIME_SECS: i64 = 5;

/// Block time of the genesis block.
pub const GENESIS_TIME: UnixTimestamp = 1_700_000_000;

/// Principal of the reference scenario.
pub const TRUST_DEPOSIT_VALUE: u64 = 1_000_000;

pub const BLOCKS_PER_YEAR: u64 = 6_311_520;

/// Per-block yield of the reference scenario: 1,000,000 × 0.15 ÷ 6,311,520.
pub const PER_BLOCK_YIELD_RAW: u128 = 23_766_065_860_521_713;

/// Length of an onboarded operator's term.
pub const TERM_SECS: i64 = 31_536_000;

pub const GROUP_ID: u64 = 1;

pub const POLICY: &str = "verana1policy";

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Params of the reference scenario: 15% yearly on 1,000,000.
pub fn scenario_params() -> Params {
    Params {
        trust_deposit_value: TRUST_DEPOSIT_VALUE,
        trust_deposit_yield_rate: Dec::from_ratio(15, 100).unwrap_or(Dec::ZERO),
        blocks_per_year: BLOCKS_PER_YEAR,
    }
}

pub fn scenario_genesis() -> AppGenesis {
    let mut genesis = AppGenesis::default();
    genesis.trust_deposit.params = scenario_params();
    genesis
}

/// A decorator that forwards unchanged.
pub fn pass_through<'a>() -> Box<dyn AnteDecorator + 'a> {
    decorator_fn(|ctx: TxContext, tx: &Tx, simulate: bool, next: Next<'_>| {
        next.run(ctx, tx, simulate)
    })
}

/// Host stages that accept every transaction.
pub fn permissive_stages<'a>() -> ExternalDecorators<'a> {
    ExternalDecorators {
        setup_context: pass_through(),
        validate_basic: pass_through(),
        deduct_fee: pass_through(),
        increment_sequence: pass_through(),
    }
}

/// Both hook reports of one block.
#[derive(Debug, Clone)]
pub struct BlockOutcome {
    pub settlement: SettlementReport,
    pub executions: ExecutionReport,
}

// ─── Test chain ──────────────────────────────────────────────────────────────

pub struct TestChain {
    pub app: App,
    pub store: MemStore,
    pub bank: MemBank,
    pub groups: MemGroupKeeper,
    /// Height of the last committed block; 0 before the first block.
    pub height: Slot,
    /// Time of the last committed block.
    pub time: UnixTimestamp,
}

impl std::fmt::Debug for TestChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestChain")
            .field("height", &self.height)
            .field("time", &self.time)
            .finish_non_exhaustive()
    }
}

impl Default for TestChain {
    fn default() -> Self {
        Self::new()
    }
}

impl TestChain {
    /// Default config, reference scenario genesis, one group with one policy.
    pub fn new() -> Self {
        match Self::with_genesis(AppConfig::default(), scenario_genesis()) {
            Ok(chain) => chain,
            Err(err) => panic!("reference chain must initialise: {err}"),
        }
    }

    pub fn with_genesis(config: AppConfig, genesis: AppGenesis) -> Result<Self, AppError> {
        vrn_logger::setup();
        let app = App::new(config)?;
        let mut store = MemStore::default();
        app.init_genesis(&mut store, &genesis)?;

        let mut groups = MemGroupKeeper::default();
        groups.add_group(GROUP_ID, Address::from("verana1admin"));
        groups.add_policy(GROUP_ID, Address::from(POLICY));

        Ok(Self {
            app,
            store,
            bank: MemBank::default(),
            groups,
            height: 0,
            time: GENESIS_TIME,
        })
    }

    pub fn accounts(&self) -> &ModuleAccounts {
        self.app.trust_deposit().accounts()
    }

    /// Context of the block about to be produced.
    pub fn next_block_context(&self) -> BlockContext {
        BlockContext::new(
            self.height.saturating_add(1),
            self.time.saturating_add(BLOCK_TIME_SECS),
        )
    }

    /// Produce one block: settlement, then auto-execution.
    pub fn next_block(&mut self) -> Result<BlockOutcome, AppError> {
        let ctx = self.next_block_context();
        let settlement = self
            .app
            .begin_block(&ctx, &mut self.store, &mut self.bank)?;
        let executions = self.app.end_block(&ctx, &mut self.groups);
        self.height = ctx.height;
        self.time = ctx.time;
        Ok(BlockOutcome {
            settlement,
            executions,
        })
    }

    pub fn advance_blocks(&mut self, count: u64) -> Result<Vec<BlockOutcome>, AppError> {
        (0..count).map(|_| self.next_block()).collect()
    }

    /// Let time pass without producing blocks.
    pub fn skip_time(&mut self, secs: i64) {
        self.time = self.time.saturating_add(secs);
    }

    /// Admission of `tx` in the next block, with accepting host stages.
    pub fn check_tx(&self, tx: &Tx) -> Result<TxContext, AnteError> {
        let ctx = TxContext::new(self.next_block_context(), ExecMode::Deliver);
        self.app
            .check_tx(ctx, tx, false, &self.store, &self.groups, permissive_stages())
    }

    // ─── Accounts ────────────────────────────────────────────────────────

    pub fn fund_yield_pool(&mut self, amount: u64) {
        let yield_pool = self.accounts().yield_pool().clone();
        self.bank.fund(&yield_pool, amount);
    }

    pub fn yield_pool_balance(&self) -> u64 {
        self.bank.balance_of(self.accounts().yield_pool())
    }

    pub fn trust_deposit_balance(&self) -> u64 {
        self.bank.balance_of(self.accounts().trust_deposit())
    }

    pub fn community_pool_balance(&self) -> u64 {
        self.bank.balance_of(self.accounts().community_pool())
    }

    pub fn dust(&self) -> Dec {
        self.app
            .trust_deposit()
            .dust(&self.store)
            .unwrap_or(Dec::ZERO)
    }

    // ─── Groups ──────────────────────────────────────────────────────────

    /// Add a proposal on the default policy whose voting window ends
    /// `window_secs` after the current block time.
    pub fn submit_proposal(&mut self, id: u64, status: ProposalStatus, window_secs: i64) -> i64 {
        let voting_period_end = self.time.saturating_add(window_secs);
        self.groups.add_proposal(Proposal {
            id,
            group_policy_address: Address::from(POLICY),
            status,
            voting_period_end,
            executor_result: ExecutorResult::NotRun,
        });
        voting_period_end
    }

    pub fn executor_result(&self, id: u64) -> Option<ExecutorResult> {
        self.groups.proposal(id).ok().map(|p| p.executor_result)
    }

    // ─── Registry ────────────────────────────────────────────────────────

    pub fn onboard(&mut self, member_id: &str, operator: &str) -> Result<(), AppError> {
        let msg = MsgOnboardValidator {
            creator: Address::from(POLICY),
            member_id: member_id.to_string(),
            operator_address: Address::from(operator),
            node_pubkey: format!("{member_id}-pubkey"),
            term_end: self.time.saturating_add(TERM_SECS),
        };
        self.app.registry().onboard_validator(&mut self.store, msg)?;
        Ok(())
    }
}
