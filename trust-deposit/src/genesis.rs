use {
    crate::{error::TrustDepositError, keeper::Keeper, params::Params},
    serde::{Deserialize, Serialize},
    vrn_interface::KvStore,
    vrn_math::Dec,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    pub params: Params,
    #[serde(default)]
    pub dust: Dec,
}

impl GenesisState {
    pub fn validate(&self) -> Result<(), TrustDepositError> {
        self.params.validate()?;
        Ok(())
    }
}

impl Keeper {
    pub fn init_genesis(
        &self,
        store: &mut dyn KvStore,
        genesis: &GenesisState,
    ) -> Result<(), TrustDepositError> {
        genesis.validate()?;
        self.set_params(store, &genesis.params)?;
        self.set_dust(store, genesis.dust)
    }

    pub fn export_genesis(&self, store: &dyn KvStore) -> Result<GenesisState, TrustDepositError> {
        Ok(GenesisState {
            params: self.params(store)?,
            dust: self.dust(store)?,
        })
    }
}
