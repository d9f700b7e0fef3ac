use {
    thiserror::Error,
    vrn_interface::{Address, GroupError},
};

/// Scheduler errors. Only an invalid configuration is returned; listing
/// failures are recorded in the [`ExecutionReport`](crate::ExecutionReport)
/// and the scan continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AutoExecError {
    #[error("failed to list groups: {0}")]
    ListGroups(#[source] GroupError),

    #[error("failed to list policies of group {group_id}: {source}")]
    ListPolicies {
        group_id: u64,
        #[source]
        source: GroupError,
    },

    #[error("failed to list proposals of policy {policy}: {source}")]
    ListProposals {
        policy: Address,
        #[source]
        source: GroupError,
    },

    #[error("invalid auto-execution configuration: {reason}")]
    InvalidConfig { reason: String },
}
