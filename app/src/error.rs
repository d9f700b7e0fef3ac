use {
    std::path::PathBuf,
    thiserror::Error,
    vrn_group_autoexec::AutoExecError,
    vrn_interface::AddressError,
    vrn_trust_deposit::TrustDepositError,
    vrn_validator_registry::RegistryError,
};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid app config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Invalid authority address: {0}")]
    InvalidAuthority(#[from] AddressError),

    #[error("Failed to read config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Trust deposit: {0}")]
    TrustDeposit(#[from] TrustDepositError),

    #[error("Validator registry: {0}")]
    Registry(#[from] RegistryError),

    #[error("Group auto-execution: {0}")]
    AutoExec(#[from] AutoExecError),
}
