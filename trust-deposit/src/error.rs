use {
    crate::params::ParamsError,
    thiserror::Error,
    vrn_interface::{Address, AddressError, BankError, StoreError},
    vrn_math::MathError,
};

/// Errors from the trust-deposit module. Any of them raised inside
/// [`begin_blocker`](crate::Keeper::begin_blocker) aborts the block.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrustDepositError {
    #[error("trust deposit params are not set")]
    ParamsNotFound,

    #[error("invalid trust deposit params: {0}")]
    InvalidParams(#[from] ParamsError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("bank error: {0}")]
    Bank(#[from] BankError),

    #[error("arithmetic error: {0}")]
    Math(#[from] MathError),

    #[error("invalid address: {0}")]
    InvalidAddress(#[from] AddressError),

    #[error("invalid authority: expected {expected}, got {got}")]
    InvalidAuthority { expected: Address, got: Address },

    #[error("module name must not be empty")]
    EmptyModuleName,

    #[error("amount must be greater than zero")]
    ZeroAmount,
}
