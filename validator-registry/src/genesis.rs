use {
    crate::{error::RegistryError, keeper::Keeper, state::Validator},
    serde::{Deserialize, Serialize},
    std::collections::BTreeSet,
    vrn_interface::KvStore,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    #[serde(default)]
    pub validators: Vec<Validator>,
}

impl GenesisState {
    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut seen = BTreeSet::new();
        for validator in &self.validators {
            if !seen.insert(validator.index.as_str()) {
                return Err(RegistryError::DuplicateIndex {
                    index: validator.index.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Keeper {
    pub fn init_genesis(
        &self,
        store: &mut dyn KvStore,
        genesis: &GenesisState,
    ) -> Result<(), RegistryError> {
        genesis.validate()?;
        for validator in &genesis.validators {
            self.set_validator(store, validator)?;
        }
        Ok(())
    }

    pub fn export_genesis(&self, store: &dyn KvStore) -> Result<GenesisState, RegistryError> {
        Ok(GenesisState {
            validators: self.all_validators(store)?,
        })
    }
}
