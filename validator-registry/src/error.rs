use {
    thiserror::Error,
    vrn_interface::{Address, AddressError, StoreError},
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("invalid creator address: {0}")]
    InvalidCreator(#[from] AddressError),

    #[error("member id cannot be empty")]
    EmptyMemberId,

    #[error("validator with index {index} already exists")]
    AlreadyExists { index: String },

    #[error("operator address cannot be empty")]
    EmptyOperatorAddress,

    #[error("invalid operator address format {address}: {source}")]
    InvalidOperatorAddress {
        address: Address,
        #[source]
        source: AddressError,
    },

    #[error("validator {index} not found")]
    NotFound { index: String },

    #[error("duplicated index {index} for validator")]
    DuplicateIndex { index: String },

    #[error("page limit must be greater than zero")]
    InvalidPage,

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
