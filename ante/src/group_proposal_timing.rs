use {
    crate::{
        decorator::{run_msg_gate, AnteDecorator, MsgGate, Next},
        error::AnteError,
    },
    vrn_interface::{GroupKeeper, Msg, MsgExec, ProposalStatus, Tx, TxContext},
};

/// Rejects proposal executions submitted before the voting period has ended
/// or for proposals that were not accepted.
pub struct GroupProposalTimingDecorator<'a> {
    groups: &'a dyn GroupKeeper,
}

impl<'a> GroupProposalTimingDecorator<'a> {
    pub fn new(groups: &'a dyn GroupKeeper) -> Self {
        Self { groups }
    }

    fn check_exec(&self, ctx: &TxContext, exec: &MsgExec) -> Result<(), AnteError> {
        let proposal_id = exec.proposal_id;
        let proposal = self
            .groups
            .proposal(proposal_id)
            .map_err(|source| AnteError::ProposalLookup {
                proposal_id,
                source,
            })?;

        let block_time = ctx.block.time;
        if block_time < proposal.voting_period_end {
            return Err(AnteError::PrematureExecution {
                proposal_id,
                voting_period_end: proposal.voting_period_end,
                block_time,
            });
        }
        if proposal.status != ProposalStatus::Accepted {
            return Err(AnteError::ProposalNotAccepted {
                proposal_id,
                status: proposal.status,
            });
        }
        Ok(())
    }
}

impl MsgGate for GroupProposalTimingDecorator<'_> {
    fn check_msg(&self, ctx: &TxContext, msg: &Msg) -> Result<(), AnteError> {
        match msg {
            Msg::GroupExec(exec) => self.check_exec(ctx, exec),
            _ => Ok(()),
        }
    }
}

impl AnteDecorator for GroupProposalTimingDecorator<'_> {
    fn ante_handle(
        &self,
        ctx: TxContext,
        tx: &Tx,
        simulate: bool,
        next: Next<'_>,
    ) -> Result<TxContext, AnteError> {
        run_msg_gate(self, ctx, tx, simulate, next)
    }
}
