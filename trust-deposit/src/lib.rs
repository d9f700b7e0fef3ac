//! # Trust-deposit yield settlement
//!
//! Every block the trust-deposit principal earns
//!
//! ```text
//! per_block_yield = trust_deposit_value × trust_deposit_yield_rate ÷ blocks_per_year
//! ```
//!
//! which is usually far below one whole unit. The fraction accumulates in a
//! persisted *dust* value; whenever `dust + per_block_yield` reaches a whole
//! unit, the integer part moves from the yield pool into the trust-deposit
//! pool and the remainder stays behind as dust. Whatever is left in the yield
//! pool afterwards is swept back to the community pool.
//!
//! See [`Keeper::begin_blocker`] for the per-block entry point.

pub mod abci;
pub mod constants;
pub mod error;
pub mod genesis;
pub mod keeper;
pub mod msg_server;
pub mod params;

pub use {
    abci::{SettlementReport, YieldAccrual, YieldTransfer},
    error::TrustDepositError,
    genesis::GenesisState,
    keeper::{Keeper, ModuleAccounts},
    msg_server::{MsgFundModule, MsgUpdateParams},
    params::{Params, ParamsError},
};
