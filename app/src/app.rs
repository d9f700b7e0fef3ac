use {
    crate::{config::AppConfig, error::AppError, genesis::AppGenesis},
    log::*,
    vrn_ante::{new_ante_handler, AnteDecorator, AnteError, HandlerOptions},
    vrn_group_autoexec::{AutoExecutor, ExecutionReport},
    vrn_interface::{BankKeeper, BlockContext, GroupKeeper, KvStore, Tx, TxContext},
    vrn_monitoring::HookMetrics,
    vrn_trust_deposit::{ModuleAccounts, SettlementReport},
    vrn_validator_registry::RegistryWhitelist,
};

/// Dust is exported as a gauge in units of 1e-9.
const DUST_GAUGE_DIVISOR: u128 = 1_000_000_000;

/// The admission stages supplied by the host ledger.
pub struct ExternalDecorators<'a> {
    pub setup_context: Box<dyn AnteDecorator + 'a>,
    pub validate_basic: Box<dyn AnteDecorator + 'a>,
    pub deduct_fee: Box<dyn AnteDecorator + 'a>,
    pub increment_sequence: Box<dyn AnteDecorator + 'a>,
}

pub struct App {
    config: AppConfig,
    trust_deposit: vrn_trust_deposit::Keeper,
    registry: vrn_validator_registry::Keeper,
    autoexec: AutoExecutor,
    metrics: HookMetrics,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App").finish_non_exhaustive()
    }
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        config.validate()?;
        let accounts = ModuleAccounts::new(
            &config.yield_pool_module,
            &config.trust_deposit_module,
            &config.community_pool_module,
        );
        let trust_deposit = vrn_trust_deposit::Keeper::new(config.authority.clone(), accounts);
        let registry = vrn_validator_registry::Keeper::new(config.valoper_prefix.clone());
        let autoexec = AutoExecutor::new(config.autoexec.clone())?;
        info!(
            "app: hooks configured (authority {}, valoper prefix {}, page limit {})",
            config.authority, config.valoper_prefix, config.autoexec.page_limit
        );
        Ok(Self {
            config,
            trust_deposit,
            registry,
            autoexec,
            metrics: HookMetrics::new(),
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn trust_deposit(&self) -> &vrn_trust_deposit::Keeper {
        &self.trust_deposit
    }

    pub fn registry(&self) -> &vrn_validator_registry::Keeper {
        &self.registry
    }

    pub fn autoexec(&self) -> &AutoExecutor {
        &self.autoexec
    }

    pub fn metrics(&self) -> &HookMetrics {
        &self.metrics
    }

    // ----- hooks -----

    /// Run the admission pipeline for `tx`.
    ///
    /// The whitelist gate reads the registry from `store`.
    pub fn check_tx(
        &self,
        ctx: TxContext,
        tx: &Tx,
        simulate: bool,
        store: &dyn KvStore,
        groups: &dyn GroupKeeper,
        external: ExternalDecorators<'_>,
    ) -> Result<TxContext, AnteError> {
        let whitelist = RegistryWhitelist::new(&self.registry, store);
        let handler = new_ante_handler(HandlerOptions {
            setup_context: Some(external.setup_context),
            validate_basic: Some(external.validate_basic),
            group_keeper: Some(groups),
            validator_whitelist: Some(&whitelist),
            deduct_fee: Some(external.deduct_fee),
            increment_sequence: Some(external.increment_sequence),
        })?;

        let result = handler.handle(ctx, tx, simulate);
        match &result {
            Ok(_) => self.metrics.tx_admitted.inc(),
            Err(err) => self.metrics.tx_rejected.inc(err.code().as_u32()),
        }
        result
    }

    /// Trust-deposit settlement. An error aborts the block.
    pub fn begin_block(
        &self,
        ctx: &BlockContext,
        store: &mut dyn KvStore,
        bank: &mut dyn BankKeeper,
    ) -> Result<SettlementReport, AppError> {
        let report = self.trust_deposit.begin_blocker(ctx, store, bank)?;

        let metrics = &self.metrics;
        metrics
            .settlement_height
            .set(i64::try_from(report.height).unwrap_or(i64::MAX));
        metrics.yield_transferred.add(report.transferred());
        if report.is_deferred() {
            metrics.yield_deferred_blocks.inc();
        }
        metrics.yield_pool_swept.add(report.swept);
        let dust_nano = report
            .dust
            .raw()
            .checked_div(DUST_GAUGE_DIVISOR)
            .unwrap_or_default();
        metrics
            .dust_nano_units
            .set(i64::try_from(dust_nano).unwrap_or(i64::MAX));
        Ok(report)
    }

    /// Proposal auto-execution. Never fails the block: listing failures and
    /// failed executions are part of the report.
    pub fn end_block(
        &self,
        ctx: &BlockContext,
        groups: &mut dyn GroupKeeper,
    ) -> ExecutionReport {
        let report = self.autoexec.run_pending_executions(ctx, groups);

        let metrics = &self.metrics;
        metrics
            .proposals_scanned
            .set(i64::try_from(report.scanned).unwrap_or(i64::MAX));
        metrics.proposals_executed.add(report.succeeded() as u64);
        metrics.proposals_failed.add(report.failed() as u64);
        metrics.proposals_deferred.add(report.deferred as u64);
        metrics
            .proposal_listing_failures
            .add(report.listing_failures.len() as u64);
        report
    }

    // ----- genesis -----

    pub fn init_genesis(
        &self,
        store: &mut dyn KvStore,
        genesis: &AppGenesis,
    ) -> Result<(), AppError> {
        genesis.validate()?;
        self.trust_deposit
            .init_genesis(store, &genesis.trust_deposit)?;
        self.registry
            .init_genesis(store, &genesis.validator_registry)?;
        info!(
            "app: genesis initialised with {} validators",
            genesis.validator_registry.validators.len()
        );
        Ok(())
    }

    pub fn export_genesis(&self, store: &dyn KvStore) -> Result<AppGenesis, AppError> {
        Ok(AppGenesis {
            trust_deposit: self.trust_deposit.export_genesis(store)?,
            validator_registry: self.registry.export_genesis(store)?,
        })
    }
}
