//! Property-based tests for the admission pipeline.
//!
//! Properties tested:
//! 1. The first violating message in transaction order decides the
//!    rejection, whichever gate catches it
//! 2. A transaction without violations passes every stage exactly once

#[cfg(test)]
mod tests {
    use {
        proptest::prelude::*,
        std::cell::Cell,
        vrn_ante::{decorator_fn, new_ante_handler, AnteError, HandlerOptions, Next},
        vrn_interface::{
            testing::MemGroupKeeper, Address, BlockContext, ExecMode, ExecutorResult, Msg,
            MsgCreateValidator, MsgExec, Proposal, ProposalStatus, Tx, TxContext,
        },
    };

    const NOW: i64 = 1_000;
    const DUE: u64 = 1;
    const PREMATURE: u64 = 2;
    const REJECTED: u64 = 3;
    const MISSING: u64 = 4;
    const LISTED: &str = "veranavaloper1listed";
    const UNLISTED: &str = "veranavaloper1unlisted";

    #[derive(Debug, Clone, Copy)]
    enum Kind {
        Other,
        ExecDue,
        ExecPremature,
        ExecRejected,
        ExecMissing,
        CreateListed,
        CreateUnlisted,
    }

    impl Kind {
        fn msg(self) -> Msg {
            let exec = |proposal_id| {
                Msg::GroupExec(MsgExec {
                    proposal_id,
                    executor: Address::from("verana1policy"),
                })
            };
            let create = |address: &str| {
                Msg::CreateValidator(MsgCreateValidator {
                    validator_address: Address::from(address),
                    moniker: String::new(),
                })
            };
            match self {
                Kind::Other => Msg::Other {
                    type_url: "/cosmos.bank.v1beta1.MsgSend".to_string(),
                },
                Kind::ExecDue => exec(DUE),
                Kind::ExecPremature => exec(PREMATURE),
                Kind::ExecRejected => exec(REJECTED),
                Kind::ExecMissing => exec(MISSING),
                Kind::CreateListed => create(LISTED),
                Kind::CreateUnlisted => create(UNLISTED),
            }
        }

        fn is_violation(self) -> bool {
            !matches!(self, Kind::Other | Kind::ExecDue | Kind::CreateListed)
        }

        fn matches(self, err: &AnteError) -> bool {
            match (self, err) {
                (Kind::ExecPremature, AnteError::PrematureExecution { proposal_id, .. }) => {
                    *proposal_id == PREMATURE
                }
                (Kind::ExecRejected, AnteError::ProposalNotAccepted { proposal_id, .. }) => {
                    *proposal_id == REJECTED
                }
                (Kind::ExecMissing, AnteError::ProposalLookup { proposal_id, .. }) => {
                    *proposal_id == MISSING
                }
                (Kind::CreateUnlisted, AnteError::ValidatorNotWhitelisted { address }) => {
                    address.as_str() == UNLISTED
                }
                _ => false,
            }
        }
    }

    fn kind_strategy() -> impl Strategy<Value = Kind> {
        prop_oneof![
            Just(Kind::Other),
            Just(Kind::ExecDue),
            Just(Kind::ExecPremature),
            Just(Kind::ExecRejected),
            Just(Kind::ExecMissing),
            Just(Kind::CreateListed),
            Just(Kind::CreateUnlisted),
        ]
    }

    fn groups() -> MemGroupKeeper {
        let mut groups = MemGroupKeeper::default();
        for (id, status, voting_period_end) in [
            (DUE, ProposalStatus::Accepted, NOW),
            (PREMATURE, ProposalStatus::Accepted, NOW + 1),
            (REJECTED, ProposalStatus::Rejected, NOW),
        ] {
            groups.add_proposal(Proposal {
                id,
                group_policy_address: Address::from("verana1policy"),
                status,
                voting_period_end,
                executor_result: ExecutorResult::NotRun,
            });
        }
        groups
    }

    fn whitelist(address: &Address) -> bool {
        address.as_str() == LISTED
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn first_violation_in_message_order_wins(
            kinds in prop::collection::vec(kind_strategy(), 0..12),
        ) {
            let groups = groups();
            let fee_runs = Cell::new(0u32);
            let pass = || {
                decorator_fn(|ctx: TxContext, tx: &Tx, simulate: bool, next: Next<'_>| {
                    next.run(ctx, tx, simulate)
                })
            };
            let handler = new_ante_handler(HandlerOptions {
                setup_context: Some(pass()),
                validate_basic: Some(pass()),
                group_keeper: Some(&groups),
                validator_whitelist: Some(&whitelist),
                deduct_fee: Some(decorator_fn(
                    |ctx: TxContext, tx: &Tx, simulate: bool, next: Next<'_>| {
                        fee_runs.set(fee_runs.get() + 1);
                        next.run(ctx, tx, simulate)
                    },
                )),
                increment_sequence: Some(pass()),
            })
            .unwrap();

            let tx = Tx::new(kinds.iter().map(|kind| kind.msg()).collect());
            let ctx = TxContext::new(BlockContext::new(7, NOW), ExecMode::Deliver);
            let result = handler.handle(ctx, &tx, false);

            match kinds.iter().find(|kind| kind.is_violation()) {
                Some(first) => {
                    let err = result.unwrap_err();
                    prop_assert!(first.matches(&err), "expected {:?}, got {:?}", first, err);
                    // ── INVARIANT: rejected before fees are charged ──
                    prop_assert_eq!(fee_runs.get(), 0);
                }
                None => {
                    prop_assert!(result.is_ok());
                    prop_assert_eq!(fee_runs.get(), 1);
                }
            }
        }
    }
}
