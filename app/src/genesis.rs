use {
    crate::error::AppError,
    serde::{Deserialize, Serialize},
};

/// Initial state of every module the hooks persist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppGenesis {
    #[serde(default)]
    pub trust_deposit: vrn_trust_deposit::GenesisState,
    #[serde(default)]
    pub validator_registry: vrn_validator_registry::GenesisState,
}

impl AppGenesis {
    pub fn validate(&self) -> Result<(), AppError> {
        self.trust_deposit.validate()?;
        self.validator_registry.validate()?;
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let genesis: Self = serde_json::from_str(json)?;
        genesis.validate()?;
        Ok(genesis)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        assert_matches::assert_matches,
        vrn_math::Dec,
        vrn_trust_deposit::TrustDepositError,
    };

    #[test]
    fn test_empty_json_is_default_genesis() {
        let genesis = AppGenesis::from_json("{}").unwrap();
        assert_eq!(genesis, AppGenesis::default());
        assert_eq!(genesis.trust_deposit.dust, Dec::ZERO);
        assert!(genesis.validator_registry.validators.is_empty());
    }

    #[test]
    fn test_invalid_params_rejected() {
        let json = r#"{
            "trust_deposit": {
                "params": {
                    "trust_deposit_value": 1000,
                    "trust_deposit_yield_rate": "1.5",
                    "blocks_per_year": 6311520
                }
            }
        }"#;
        assert_matches!(
            AppGenesis::from_json(json),
            Err(AppError::TrustDeposit(TrustDepositError::InvalidParams(_)))
        );
    }
}
