//! Property-based tests for proposal auto-execution.
//!
//! Properties tested:
//! 1. At-most-once: no proposal is executed twice across repeated scans,
//!    and proposals resolved before the first scan are never executed
//! 2. Completeness: every accepted proposal whose window ended by the last
//!    scan has been executed exactly once
//! 3. Window: no execution happens before the voting period ends

#[cfg(test)]
mod tests {
    use {
        proptest::prelude::*,
        vrn_group_autoexec::{AutoExecConfig, AutoExecutor},
        vrn_interface::{
            testing::MemGroupKeeper, Address, BlockContext, ExecutorResult, Proposal,
            ProposalStatus,
        },
    };

    const POLICIES: [&str; 3] = ["verana1policya", "verana1policyb", "verana1policyc"];

    #[derive(Debug, Clone)]
    struct ProposalSeed {
        policy: usize,
        status: ProposalStatus,
        voting_period_end: i64,
        executor_result: ExecutorResult,
        failing: bool,
    }

    fn seed_strategy() -> impl Strategy<Value = ProposalSeed> {
        (
            0..POLICIES.len(),
            prop_oneof![
                4 => Just(ProposalStatus::Accepted),
                1 => Just(ProposalStatus::Submitted),
                1 => Just(ProposalStatus::Rejected),
                1 => Just(ProposalStatus::Aborted),
            ],
            0..200i64,
            prop_oneof![
                4 => Just(ExecutorResult::NotRun),
                1 => Just(ExecutorResult::Success),
                1 => Just(ExecutorResult::Failure),
            ],
            prop::bool::weighted(0.2),
        )
            .prop_map(|(policy, status, voting_period_end, executor_result, failing)| ProposalSeed {
                policy,
                status,
                voting_period_end,
                executor_result,
                failing,
            })
    }

    fn keeper(seeds: &[ProposalSeed]) -> MemGroupKeeper {
        let mut groups = MemGroupKeeper::default();
        groups.add_group(1, Address::from("verana1admina"));
        groups.add_group(2, Address::from("verana1adminb"));
        groups.add_policy(1, Address::from(POLICIES[0]));
        groups.add_policy(1, Address::from(POLICIES[1]));
        groups.add_policy(2, Address::from(POLICIES[2]));
        for (i, seed) in seeds.iter().enumerate() {
            let id = i as u64 + 1;
            groups.add_proposal(Proposal {
                id,
                group_policy_address: Address::from(POLICIES[seed.policy]),
                status: seed.status,
                voting_period_end: seed.voting_period_end,
                executor_result: seed.executor_result,
            });
            if seed.failing {
                groups.failing.insert(id);
            }
        }
        groups
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn proposals_execute_at_most_once(
            seeds in prop::collection::vec(seed_strategy(), 0..40),
            step in 1..50i64,
            blocks in 1..12u64,
            page_limit in 1..10u64,
        ) {
            let mut groups = keeper(&seeds);
            let executor = AutoExecutor::new(AutoExecConfig {
                page_limit,
                max_executions_per_block: None,
            })
            .unwrap();

            let mut last_time = 0;
            for height in 1..=blocks {
                let time = height as i64 * step;
                let report =
                    executor.run_pending_executions(&BlockContext::new(height, time), &mut groups);
                prop_assert_eq!(report.scanned, seeds.len());

                // ── INVARIANT: nothing executed before its window ends ──
                for id in report.executed_ids() {
                    let seed = &seeds[id as usize - 1];
                    prop_assert!(seed.voting_period_end <= time);
                }
                last_time = time;
            }

            for (i, seed) in seeds.iter().enumerate() {
                let id = i as u64 + 1;
                let count = groups.exec_count(id);
                prop_assert!(count <= 1, "proposal {} executed {} times", id, count);

                let eligible = seed.executor_result == ExecutorResult::NotRun
                    && seed.status == ProposalStatus::Accepted
                    && seed.voting_period_end <= last_time;
                prop_assert_eq!(count == 1, eligible, "proposal {}: {:?}", id, seed);
            }
        }
    }
}
