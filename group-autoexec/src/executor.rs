use {
    crate::{config::AutoExecConfig, error::AutoExecError},
    log::*,
    solana_clock::Slot,
    vrn_interface::{
        Address, BlockContext, ExecutorResult, GroupError, GroupKeeper, MsgExec, Page,
        PageRequest, Proposal, ProposalStatus,
    },
};

/// Result of one execution attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub proposal_id: u64,
    pub group_policy_address: Address,
    pub result: Result<ExecutorResult, GroupError>,
}

impl ExecutionOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self.result, Ok(ExecutorResult::Success))
    }
}

/// What one end-of-block scan saw and did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionReport {
    pub height: Slot,
    /// Proposals visited across all groups and policies.
    pub scanned: usize,
    /// Skipped: voting period still open.
    pub not_yet_due: usize,
    /// Skipped: executor result already `Success` or `Failure`.
    pub already_resolved: usize,
    /// Skipped: due and unresolved, but not accepted.
    pub not_accepted: usize,
    /// Eligible but left for a later block by the per-block cap.
    pub deferred: usize,
    /// Execution attempts in scan order.
    pub outcomes: Vec<ExecutionOutcome>,
    /// Listings that failed; the group or policy behind each was skipped.
    pub listing_failures: Vec<AutoExecError>,
}

impl ExecutionReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    /// Attempts that ended with a `Failure` result or an error.
    pub fn failed(&self) -> usize {
        self.outcomes.len().saturating_sub(self.succeeded())
    }

    pub fn executed_ids(&self) -> Vec<u64> {
        self.outcomes.iter().map(|o| o.proposal_id).collect()
    }
}

/// Drain a paginated listing.
fn list_all<T>(
    page_limit: u64,
    mut fetch: impl FnMut(PageRequest) -> Result<Page<T>, GroupError>,
) -> Result<Vec<T>, GroupError> {
    let mut items = Vec::new();
    let mut request = Some(PageRequest::first(page_limit));
    while let Some(page_request) = request {
        let page = fetch(page_request)?;
        items.extend(page.items);
        request = page.next;
    }
    Ok(items)
}

#[derive(Debug, Clone, Default)]
pub struct AutoExecutor {
    config: AutoExecConfig,
}

impl AutoExecutor {
    pub fn new(config: AutoExecConfig) -> Result<Self, AutoExecError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AutoExecConfig {
        &self.config
    }

    /// Scan every proposal and execute the eligible ones.
    ///
    /// Never fails the block. A failed listing is logged and recorded, and
    /// the scan moves on to the next group or policy. Execution failures are
    /// recorded the same way.
    pub fn run_pending_executions(
        &self,
        ctx: &BlockContext,
        groups: &mut dyn GroupKeeper,
    ) -> ExecutionReport {
        debug!(
            "group autoexec: checking pending proposal executions at height {} time {}",
            ctx.height, ctx.time
        );
        let mut report = ExecutionReport {
            height: ctx.height,
            ..ExecutionReport::default()
        };

        // The full listing completes before the first execution, so proposals
        // pruned by an execution cannot shift later pages.
        let mut eligible = Vec::new();
        for proposal in self.list_proposals(&*groups, &mut report.listing_failures) {
            report.scanned = report.scanned.saturating_add(1);
            if ctx.time < proposal.voting_period_end {
                report.not_yet_due = report.not_yet_due.saturating_add(1);
            } else if proposal.executor_result.is_resolved() {
                report.already_resolved = report.already_resolved.saturating_add(1);
            } else if proposal.status == ProposalStatus::Accepted {
                eligible.push(proposal);
            } else {
                report.not_accepted = report.not_accepted.saturating_add(1);
            }
        }

        let cap = self
            .config
            .max_executions_per_block
            .map_or(usize::MAX, |cap| cap as usize);
        for proposal in eligible {
            if report.outcomes.len() >= cap {
                report.deferred = report.deferred.saturating_add(1);
                continue;
            }
            report.outcomes.push(Self::execute(ctx, groups, proposal));
        }

        if report.deferred > 0 {
            info!(
                "group autoexec: per-block cap reached at height {}, {} eligible proposals deferred",
                ctx.height, report.deferred
            );
        }
        report
    }

    /// Every proposal of every listable policy of every listable group, in
    /// listing order.
    fn list_proposals(
        &self,
        groups: &dyn GroupKeeper,
        failures: &mut Vec<AutoExecError>,
    ) -> Vec<Proposal> {
        let limit = self.config.page_limit;
        let mut proposals = Vec::new();

        let all_groups = match list_all(limit, |page| groups.groups(page)) {
            Ok(all_groups) => all_groups,
            Err(source) => {
                let err = AutoExecError::ListGroups(source);
                error!("group autoexec: {err}");
                failures.push(err);
                return proposals;
            }
        };
        for group in all_groups {
            let policies =
                match list_all(limit, |page| groups.group_policies_by_group(group.id, page)) {
                    Ok(policies) => policies,
                    Err(source) => {
                        let err = AutoExecError::ListPolicies {
                            group_id: group.id,
                            source,
                        };
                        error!("group autoexec: {err}");
                        failures.push(err);
                        continue;
                    }
                };
            for policy in policies {
                match list_all(limit, |page| {
                    groups.proposals_by_group_policy(&policy.address, page)
                }) {
                    Ok(listed) => proposals.extend(listed),
                    Err(source) => {
                        let err = AutoExecError::ListProposals {
                            policy: policy.address.clone(),
                            source,
                        };
                        error!("group autoexec: {err}");
                        failures.push(err);
                    }
                }
            }
        }
        proposals
    }

    fn execute(
        ctx: &BlockContext,
        groups: &mut dyn GroupKeeper,
        proposal: Proposal,
    ) -> ExecutionOutcome {
        let Proposal {
            id,
            group_policy_address,
            voting_period_end,
            ..
        } = proposal;
        info!(
            "group autoexec: executing accepted proposal {id} of policy {group_policy_address} \
             (voting period ended {voting_period_end}, block time {})",
            ctx.time
        );

        let result = groups
            .exec(
                ctx,
                MsgExec {
                    proposal_id: id,
                    executor: group_policy_address.clone(),
                },
            )
            .map(|response| response.result);

        match &result {
            Ok(ExecutorResult::Success) => {
                info!("group autoexec: proposal {id} executed successfully");
            }
            Ok(other) => {
                warn!("group autoexec: proposal {id} executed with result {other}");
            }
            Err(err) => {
                warn!("group autoexec: failed to execute proposal {id}: {err}");
            }
        }

        ExecutionOutcome {
            proposal_id: id,
            group_policy_address,
            result,
        }
    }
}
