use {
    chrono::{DateTime, SecondsFormat},
    num_derive::{FromPrimitive, ToPrimitive},
    num_traits::ToPrimitive,
    solana_clock::UnixTimestamp,
    thiserror::Error,
    vrn_interface::{Address, GroupError, ProposalStatus},
};

/// Machine-checkable reason attached to every rejection.
///
/// Values follow the ledger runtime's root error codes so that rejections
/// from the external stages and from the gates share one numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
#[repr(u32)]
pub enum RejectCode {
    Internal = 1,
    TxDecode = 2,
    Unauthorized = 4,
    InsufficientFunds = 5,
    InsufficientFee = 13,
    InvalidRequest = 18,
    WrongSequence = 32,
}

impl RejectCode {
    pub fn as_u32(self) -> u32 {
        self.to_u32().unwrap_or_default()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnteError {
    #[error("failed to get proposal {proposal_id}: {source}")]
    ProposalLookup {
        proposal_id: u64,
        #[source]
        source: GroupError,
    },

    #[error(
        "proposal {proposal_id} cannot be executed yet: voting period ends at {}, \
         current time is {}",
        rfc3339(.voting_period_end),
        rfc3339(.block_time)
    )]
    PrematureExecution {
        proposal_id: u64,
        voting_period_end: UnixTimestamp,
        block_time: UnixTimestamp,
    },

    #[error(
        "proposal {proposal_id} is not in ACCEPTED status (current: {status}); \
         only accepted proposals can be executed"
    )]
    ProposalNotAccepted {
        proposal_id: u64,
        status: ProposalStatus,
    },

    #[error("validator address {address} is not authorized to create a validator")]
    ValidatorNotWhitelisted { address: Address },

    /// Rejection raised by one of the externally supplied stages.
    #[error("{message}")]
    External { code: RejectCode, message: String },

    #[error("{option} is required for the ante handler")]
    MissingHandlerOption { option: &'static str },
}

impl AnteError {
    pub fn code(&self) -> RejectCode {
        match self {
            AnteError::ProposalLookup { .. } => RejectCode::InvalidRequest,
            AnteError::PrematureExecution { .. }
            | AnteError::ProposalNotAccepted { .. }
            | AnteError::ValidatorNotWhitelisted { .. } => RejectCode::Unauthorized,
            AnteError::External { code, .. } => *code,
            AnteError::MissingHandlerOption { .. } => RejectCode::Internal,
        }
    }
}

fn rfc3339(timestamp: &UnixTimestamp) -> String {
    DateTime::from_timestamp(*timestamp, 0)
        .map(|time| time.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| format!("@{timestamp}"))
}
