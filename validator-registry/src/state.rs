use {
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    solana_clock::UnixTimestamp,
    vrn_interface::Address,
};

/// Store prefix of validator records; the member id follows.
pub const VALIDATOR_KEY_PREFIX: &[u8] = b"validator/value/";

pub const VALIDATOR_DISCRIMINATOR: u8 = 1;

/// Status assigned at onboarding.
pub const STATUS_ACTIVE: &str = "active";

#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct Validator {
    /// Store key; equal to `member_id`.
    pub index: String,
    pub member_id: String,
    pub operator_address: Address,
    pub consensus_pubkey: String,
    pub status: String,
    pub term_end: UnixTimestamp,
}
