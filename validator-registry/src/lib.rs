//! # Validator registry
//!
//! Records of onboarded validator operators, keyed by member id. The
//! admission pipeline consults the registry through [`RegistryWhitelist`]
//! before letting a transaction create a validator.

pub mod error;
pub mod genesis;
pub mod keeper;
pub mod msg_server;
pub mod query;
pub mod state;

pub use {
    error::RegistryError,
    genesis::GenesisState,
    keeper::{Keeper, RegistryWhitelist},
    msg_server::MsgOnboardValidator,
    state::Validator,
};
