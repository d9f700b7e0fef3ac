//! Property-based tests for trust-deposit settlement.
//!
//! Properties tested:
//! 1. Dust conservation: Σ per-block yield == Σ transferred + final dust
//! 2. Threshold: a block transfers iff carried dust plus its yield reaches
//!    one whole unit and the yield pool covers it
//! 3. Empty yield pool: the deposit never changes, dust grows by the yield
//! 4. Sweep: the yield pool is empty after every block

#[cfg(test)]
mod tests {
    use {
        proptest::prelude::*,
        vrn_interface::{
            testing::{MemBank, MemStore},
            Address, BlockContext,
        },
        vrn_math::Dec,
        vrn_trust_deposit::{Keeper, ModuleAccounts, Params, YieldTransfer},
    };

    fn setup(deposit: u64, rate_bps: u64, blocks_per_year: u64) -> (Keeper, MemStore, MemBank) {
        let keeper = Keeper::new(Address::from("verana1gov"), ModuleAccounts::default());
        let mut store = MemStore::default();
        let params = Params {
            trust_deposit_value: deposit,
            trust_deposit_yield_rate: Dec::from_ratio(rate_bps, 10_000).unwrap(),
            blocks_per_year,
        };
        keeper.set_params(&mut store, &params).unwrap();
        (keeper, store, MemBank::default())
    }

    fn block(height: u64) -> BlockContext {
        BlockContext::new(height, 1_700_000_000 + height as i64 * 5)
    }

    fn params_strategy() -> impl Strategy<Value = (u64, u64, u64)> {
        (
            0..=10_000_000_000u64,
            0..=10_000u64,
            1..=10_000_000u64,
        )
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 1. Dust conservation
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn dust_is_conserved(
            (deposit, rate_bps, blocks_per_year) in params_strategy(),
            funding in prop::collection::vec(0..=50u64, 0..150),
        ) {
            let (keeper, mut store, mut bank) = setup(deposit, rate_bps, blocks_per_year);
            let yield_pool = keeper.accounts().yield_pool().clone();

            let mut accrued = Dec::ZERO;
            let mut transferred = 0u64;
            for (i, fund) in funding.iter().enumerate() {
                bank.fund(&yield_pool, *fund);
                let report = keeper
                    .begin_blocker(&block(i as u64 + 1), &mut store, &mut bank)
                    .unwrap();
                accrued = accrued.checked_add(report.per_block_yield).unwrap();
                transferred += report.transferred();
            }

            let dust = keeper.dust(&store).unwrap();
            let settled = Dec::from_int(transferred).checked_add(dust).unwrap();

            // ── INVARIANT: nothing created or lost ──
            prop_assert_eq!(settled, accrued, "transferred {} + dust {}", transferred, dust);
            prop_assert_eq!(
                bank.balance_of(keeper.accounts().trust_deposit()),
                transferred
            );
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 2. Threshold behaviour
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn transfer_iff_threshold_reached_and_covered(
            (deposit, rate_bps, blocks_per_year) in params_strategy(),
            funding in prop::collection::vec(0..=3u64, 1..100),
        ) {
            let (keeper, mut store, mut bank) = setup(deposit, rate_bps, blocks_per_year);
            let yield_pool = keeper.accounts().yield_pool().clone();

            for (i, fund) in funding.iter().enumerate() {
                bank.fund(&yield_pool, *fund);
                let before = keeper.dust(&store).unwrap();
                let report = keeper
                    .begin_blocker(&block(i as u64 + 1), &mut store, &mut bank)
                    .unwrap();
                let total = before.checked_add(report.per_block_yield).unwrap();
                let owed = total.truncate_u64().unwrap();

                match report.transfer {
                    YieldTransfer::Accrued => {
                        prop_assert!(total < Dec::ONE);
                        prop_assert_eq!(report.dust, total);
                    }
                    YieldTransfer::Transferred { amount } => {
                        prop_assert!(total >= Dec::ONE);
                        prop_assert!(*fund >= amount);
                        prop_assert_eq!(amount, owed);
                        prop_assert_eq!(report.dust, total.fract());
                    }
                    YieldTransfer::Deferred { owed: deferred, available } => {
                        prop_assert!(total >= Dec::ONE);
                        prop_assert_eq!(deferred, owed);
                        prop_assert_eq!(available, *fund);
                        prop_assert!(available < owed);
                        prop_assert_eq!(report.dust, total);
                    }
                }
                prop_assert_eq!(keeper.dust(&store).unwrap(), report.dust);
            }
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 3. Empty yield pool
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn empty_pool_never_moves_deposit(
            (deposit, rate_bps, blocks_per_year) in params_strategy(),
            blocks in 1..200u64,
        ) {
            let (keeper, mut store, mut bank) = setup(deposit, rate_bps, blocks_per_year);

            for height in 1..=blocks {
                let before = keeper.dust(&store).unwrap();
                let report = keeper
                    .begin_blocker(&block(height), &mut store, &mut bank)
                    .unwrap();

                // ── INVARIANT: dust grows by exactly one block's yield ──
                prop_assert_eq!(
                    report.dust,
                    before.checked_add(report.per_block_yield).unwrap()
                );
                if !report.per_block_yield.is_zero() {
                    prop_assert!(report.dust > before);
                }
                prop_assert_eq!(report.transferred(), 0);
                prop_assert_eq!(report.swept, 0);
            }
            prop_assert_eq!(bank.balance_of(keeper.accounts().trust_deposit()), 0);
            prop_assert!(bank.transfers.is_empty());
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 4. Sweep
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn yield_pool_is_drained_every_block(
            (deposit, rate_bps, blocks_per_year) in params_strategy(),
            funding in prop::collection::vec(0..=1_000_000u64, 1..50),
        ) {
            let (keeper, mut store, mut bank) = setup(deposit, rate_bps, blocks_per_year);
            let accounts = keeper.accounts().clone();
            let supply_before_funding = bank.total_supply();
            let mut funded = 0u128;

            for (i, fund) in funding.iter().enumerate() {
                bank.fund(accounts.yield_pool(), *fund);
                funded += u128::from(*fund);
                let report = keeper
                    .begin_blocker(&block(i as u64 + 1), &mut store, &mut bank)
                    .unwrap();

                prop_assert_eq!(bank.balance_of(accounts.yield_pool()), 0);
                prop_assert_eq!(report.swept + report.transferred(), *fund);
            }

            // ── INVARIANT: transfers only move funds between pools ──
            prop_assert_eq!(bank.total_supply(), supply_before_funding + funded);
            prop_assert_eq!(
                u128::from(bank.balance_of(accounts.trust_deposit()))
                    + u128::from(bank.balance_of(accounts.community_pool())),
                funded
            );
        }
    }

    #[test]
    fn reference_scenario_block_43() {
        let (keeper, mut store, mut bank) = setup(1_000_000, 1_500, 6_311_520);
        for height in 1..=42 {
            let report = keeper.begin_blocker(&block(height), &mut store, &mut bank).unwrap();
            assert_eq!(report.transfer, YieldTransfer::Accrued);
        }
        bank.fund(keeper.accounts().yield_pool(), 1);
        let report = keeper.begin_blocker(&block(43), &mut store, &mut bank).unwrap();
        assert_eq!(report.transfer, YieldTransfer::Transferred { amount: 1 });
        assert_eq!(report.dust.to_string(), "0.021940832002433659");
    }
}
