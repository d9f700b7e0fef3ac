//! Governance-group bookkeeping as seen by the hooks.

use {
    crate::{address::Address, context::BlockContext},
    solana_clock::UnixTimestamp,
    std::fmt,
    thiserror::Error,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProposalStatus {
    /// Pending: voting has not concluded.
    Submitted,
    Accepted,
    Rejected,
    Aborted,
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProposalStatus::Submitted => "PROPOSAL_STATUS_SUBMITTED",
            ProposalStatus::Accepted => "PROPOSAL_STATUS_ACCEPTED",
            ProposalStatus::Rejected => "PROPOSAL_STATUS_REJECTED",
            ProposalStatus::Aborted => "PROPOSAL_STATUS_ABORTED",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExecutorResult {
    #[default]
    NotRun,
    Success,
    Failure,
}

impl ExecutorResult {
    /// `Success` and `Failure` are terminal: the proposal has been executed.
    pub fn is_resolved(self) -> bool {
        !matches!(self, ExecutorResult::NotRun)
    }
}

impl fmt::Display for ExecutorResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExecutorResult::NotRun => "PROPOSAL_EXECUTOR_RESULT_NOT_RUN",
            ExecutorResult::Success => "PROPOSAL_EXECUTOR_RESULT_SUCCESS",
            ExecutorResult::Failure => "PROPOSAL_EXECUTOR_RESULT_FAILURE",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub id: u64,
    pub group_policy_address: Address,
    pub status: ProposalStatus,
    /// Execution is not permitted before this time.
    pub voting_period_end: UnixTimestamp,
    pub executor_result: ExecutorResult,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupInfo {
    pub id: u64,
    pub admin: Address,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPolicyInfo {
    pub address: Address,
    pub group_id: u64,
}

/// Request to execute an accepted proposal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgExec {
    pub proposal_id: u64,
    pub executor: Address,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecResponse {
    pub result: ExecutorResult,
}

/// Offset pagination over a key-ordered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: u64,
    pub limit: u64,
}

impl PageRequest {
    pub const fn first(limit: u64) -> Self {
        Self { offset: 0, limit }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Request for the following page, `None` on the last one.
    pub next: Option<PageRequest>,
}

impl<T> Page<T> {
    /// Slice an already key-ordered listing.
    pub fn paginate(all: impl IntoIterator<Item = T>, request: PageRequest) -> Self {
        let offset = usize::try_from(request.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(request.limit).unwrap_or(usize::MAX);
        let mut rest = all.into_iter().skip(offset);
        let items: Vec<T> = rest.by_ref().take(limit).collect();
        let next = rest.next().map(|_| PageRequest {
            offset: request.offset.saturating_add(items.len() as u64),
            limit: request.limit,
        });
        Self { items, next }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    #[error("proposal {id} not found")]
    ProposalNotFound { id: u64 },

    #[error("group {id} not found")]
    GroupNotFound { id: u64 },

    #[error("invalid page request: {0}")]
    InvalidPage(String),

    #[error("proposal {id} execution failed: {reason}")]
    Execution { id: u64, reason: String },

    #[error("group store unavailable: {0}")]
    Unavailable(String),
}

/// Group, decision-policy and proposal bookkeeping.
///
/// Listings are ascending by id (groups, proposals) or address (policies).
pub trait GroupKeeper {
    fn proposal(&self, id: u64) -> Result<Proposal, GroupError>;

    fn groups(&self, page: PageRequest) -> Result<Page<GroupInfo>, GroupError>;

    fn group_policies_by_group(
        &self,
        group_id: u64,
        page: PageRequest,
    ) -> Result<Page<GroupPolicyInfo>, GroupError>;

    fn proposals_by_group_policy(
        &self,
        address: &Address,
        page: PageRequest,
    ) -> Result<Page<Proposal>, GroupError>;

    /// Execute an accepted proposal. A proposal whose messages fail still
    /// returns `Ok` with [`ExecutorResult::Failure`].
    fn exec(&mut self, ctx: &BlockContext, msg: MsgExec) -> Result<ExecResponse, GroupError>;
}
