use {
    crate::{
        error::RegistryError,
        state::{Validator, VALIDATOR_DISCRIMINATOR, VALIDATOR_KEY_PREFIX},
    },
    log::*,
    vrn_interface::{Address, KvStore, Map, ValidatorWhitelist},
};

pub(crate) const VALIDATORS: Map<Validator> =
    Map::new(VALIDATOR_KEY_PREFIX, VALIDATOR_DISCRIMINATOR);

#[derive(Debug, Clone)]
pub struct Keeper {
    valoper_prefix: String,
}

impl Keeper {
    /// `valoper_prefix` is the human-readable prefix every operator address
    /// must carry, e.g. `veranavaloper`.
    pub fn new(valoper_prefix: impl Into<String>) -> Self {
        Self {
            valoper_prefix: valoper_prefix.into(),
        }
    }

    pub fn valoper_prefix(&self) -> &str {
        &self.valoper_prefix
    }

    pub fn set_validator(
        &self,
        store: &mut dyn KvStore,
        validator: &Validator,
    ) -> Result<(), RegistryError> {
        VALIDATORS.save(store, &validator.index, validator)?;
        Ok(())
    }

    pub fn has_validator(&self, store: &dyn KvStore, index: &str) -> Result<bool, RegistryError> {
        Ok(VALIDATORS.has(store, index)?)
    }

    pub fn remove_validator(&self, store: &mut dyn KvStore, index: &str) -> Result<(), RegistryError> {
        VALIDATORS.remove(store, index)?;
        Ok(())
    }

    /// All records in key order.
    pub fn all_validators(&self, store: &dyn KvStore) -> Result<Vec<Validator>, RegistryError> {
        Ok(VALIDATORS
            .entries(store)?
            .into_iter()
            .map(|(_, validator)| validator)
            .collect())
    }

    /// Whether any stored record names `operator` as its operator address.
    pub fn is_validator_whitelisted(
        &self,
        store: &dyn KvStore,
        operator: &Address,
    ) -> Result<bool, RegistryError> {
        Ok(self
            .all_validators(store)?
            .iter()
            .any(|validator| &validator.operator_address == operator))
    }
}

/// [`ValidatorWhitelist`] view of a keeper over a store.
///
/// A store failure counts as "not whitelisted".
pub struct RegistryWhitelist<'a> {
    keeper: &'a Keeper,
    store: &'a dyn KvStore,
}

impl<'a> RegistryWhitelist<'a> {
    pub fn new(keeper: &'a Keeper, store: &'a dyn KvStore) -> Self {
        Self { keeper, store }
    }
}

impl ValidatorWhitelist for RegistryWhitelist<'_> {
    fn is_whitelisted(&self, operator: &Address) -> bool {
        self.keeper
            .is_validator_whitelisted(self.store, operator)
            .unwrap_or_else(|err| {
                warn!("validator registry: whitelist lookup for {operator} failed: {err}");
                false
            })
    }
}
