use {crate::address::Address, thiserror::Error};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    #[error("insufficient funds in {address}: balance {balance}, required {required}")]
    InsufficientFunds {
        address: Address,
        balance: u64,
        required: u64,
    },

    #[error("balance overflow crediting {address}")]
    Overflow { address: Address },

    #[error("bank unavailable: {0}")]
    Unavailable(String),
}

/// Balance storage and atomic transfers of the native denomination.
pub trait BankKeeper {
    fn balance(&self, address: &Address) -> Result<u64, BankError>;

    /// Move `amount` from `from` to `to` atomically. On error neither balance
    /// changes.
    fn send(&mut self, from: &Address, to: &Address, amount: u64) -> Result<(), BankError>;
}
