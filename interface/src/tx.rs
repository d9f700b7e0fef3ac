use crate::{address::Address, group::MsgExec};

/// Request to join the validator set under `validator_address`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgCreateValidator {
    pub validator_address: Address,
    pub moniker: String,
}

/// The messages the admission gates care about. Everything else is carried
/// opaquely by type URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    GroupExec(MsgExec),
    CreateValidator(MsgCreateValidator),
    Other { type_url: String },
}

impl Msg {
    pub fn type_url(&self) -> &str {
        match self {
            Msg::GroupExec(_) => "/cosmos.group.v1.MsgExec",
            Msg::CreateValidator(_) => "/cosmos.staking.v1beta1.MsgCreateValidator",
            Msg::Other { type_url } => type_url,
        }
    }
}

/// A decoded transaction: an ordered list of messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tx {
    pub msgs: Vec<Msg>,
}

impl Tx {
    pub fn new(msgs: Vec<Msg>) -> Self {
        Self { msgs }
    }
}
