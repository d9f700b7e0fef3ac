//! Begin-block settlement.

use {
    crate::{error::TrustDepositError, keeper::Keeper},
    log::*,
    solana_clock::Slot,
    vrn_interface::{BankKeeper, BlockContext, KvStore},
    vrn_math::Dec,
};

/// What step A did with the accrued yield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YieldTransfer {
    /// Below one whole unit; everything stayed in dust.
    Accrued,
    /// `amount` whole units moved from the yield pool to the trust deposit.
    Transferred { amount: u64 },
    /// A whole-unit transfer was due but the yield pool could not cover it.
    /// The owed amount stays in dust for a later block.
    Deferred { owed: u64, available: u64 },
}

/// Outcome of [`Keeper::send_funds_from_yield_pool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YieldAccrual {
    pub per_block_yield: Dec,
    pub transfer: YieldTransfer,
    /// Dust persisted at the end of the step.
    pub dust: Dec,
}

/// Outcome of a full [`Keeper::begin_blocker`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettlementReport {
    pub height: Slot,
    pub per_block_yield: Dec,
    pub transfer: YieldTransfer,
    pub dust: Dec,
    /// Amount returned from the yield pool to the community pool.
    pub swept: u64,
}

impl SettlementReport {
    pub fn transferred(&self) -> u64 {
        match self.transfer {
            YieldTransfer::Transferred { amount } => amount,
            _ => 0,
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self.transfer, YieldTransfer::Deferred { .. })
    }
}

impl Keeper {
    /// Per-block settlement: accrue yield (and transfer whole units), then
    /// sweep what is left in the yield pool to the community pool.
    ///
    /// Any error aborts the block. Dust is only written after the transfer
    /// succeeded or was deliberately skipped.
    pub fn begin_blocker(
        &self,
        ctx: &BlockContext,
        store: &mut dyn KvStore,
        bank: &mut dyn BankKeeper,
    ) -> Result<SettlementReport, TrustDepositError> {
        let accrual = self.send_funds_from_yield_pool(ctx, store, bank)?;
        let swept = self.send_funds_back_to_community_pool(ctx, bank)?;
        Ok(SettlementReport {
            height: ctx.height,
            per_block_yield: accrual.per_block_yield,
            transfer: accrual.transfer,
            dust: accrual.dust,
            swept,
        })
    }

    /// Step A: add this block's yield to dust and move whole units from the
    /// yield pool into the trust-deposit pool.
    pub fn send_funds_from_yield_pool(
        &self,
        ctx: &BlockContext,
        store: &mut dyn KvStore,
        bank: &mut dyn BankKeeper,
    ) -> Result<YieldAccrual, TrustDepositError> {
        let params = self.params(store)?;
        let per_block_yield = params.per_block_yield()?;
        let total = self.dust(store)?.checked_add(per_block_yield)?;

        if total < Dec::ONE {
            self.set_dust(store, total)?;
            debug!(
                "trust deposit: height {} accrued {per_block_yield}, dust now {total}",
                ctx.height
            );
            return Ok(YieldAccrual {
                per_block_yield,
                transfer: YieldTransfer::Accrued,
                dust: total,
            });
        }

        let amount = total.truncate_u64()?;
        let remaining = total.fract();
        let accounts = self.accounts();
        let available = bank.balance(accounts.yield_pool())?;

        if available < amount {
            // No partial transfer. Dust keeps the whole owed amount, this
            // block's yield included, so deferred yield is never dropped.
            self.set_dust(store, total)?;
            warn!(
                "trust deposit: height {} yield pool balance {available} cannot cover {amount}, \
                 deferring (dust {total})",
                ctx.height
            );
            return Ok(YieldAccrual {
                per_block_yield,
                transfer: YieldTransfer::Deferred {
                    owed: amount,
                    available,
                },
                dust: total,
            });
        }

        bank.send(accounts.yield_pool(), accounts.trust_deposit(), amount)?;
        self.set_dust(store, remaining)?;
        info!(
            "trust deposit: height {} transferred {amount} from {} to {}, dust now {remaining}",
            ctx.height,
            accounts.yield_pool_name(),
            accounts.trust_deposit_name(),
        );
        Ok(YieldAccrual {
            per_block_yield,
            transfer: YieldTransfer::Transferred { amount },
            dust: remaining,
        })
    }

    /// Step B: return the entire remaining yield pool balance to the
    /// community pool. Returns the amount moved.
    pub fn send_funds_back_to_community_pool(
        &self,
        ctx: &BlockContext,
        bank: &mut dyn BankKeeper,
    ) -> Result<u64, TrustDepositError> {
        let accounts = self.accounts();
        let excess = bank.balance(accounts.yield_pool())?;
        if excess == 0 {
            return Ok(0);
        }
        bank.send(accounts.yield_pool(), accounts.community_pool(), excess)?;
        info!(
            "trust deposit: height {} returned {excess} from {} to {}",
            ctx.height,
            accounts.yield_pool_name(),
            accounts.community_pool_name(),
        );
        Ok(excess)
    }
}
