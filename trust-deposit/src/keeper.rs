use {
    crate::{
        constants::{
            COMMUNITY_POOL_MODULE_NAME, DUST_DISCRIMINATOR, DUST_KEY, MODULE_NAME,
            PARAMS_DISCRIMINATOR, PARAMS_KEY, YIELD_POOL_MODULE_NAME,
        },
        error::TrustDepositError,
        params::Params,
    },
    log::*,
    vrn_interface::{Address, Item, KvStore},
    vrn_math::Dec,
};

const PARAMS: Item<Params> = Item::new(PARAMS_KEY, PARAMS_DISCRIMINATOR);
const DUST: Item<Dec> = Item::new(DUST_KEY, DUST_DISCRIMINATOR);

/// Module names of the three pooled accounts and their derived addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleAccounts {
    yield_pool_name: String,
    trust_deposit_name: String,
    community_pool_name: String,
    yield_pool: Address,
    trust_deposit: Address,
    community_pool: Address,
}

impl ModuleAccounts {
    pub fn new(yield_pool: &str, trust_deposit: &str, community_pool: &str) -> Self {
        Self {
            yield_pool_name: yield_pool.to_string(),
            trust_deposit_name: trust_deposit.to_string(),
            community_pool_name: community_pool.to_string(),
            yield_pool: Address::module(yield_pool),
            trust_deposit: Address::module(trust_deposit),
            community_pool: Address::module(community_pool),
        }
    }

    pub fn yield_pool_name(&self) -> &str {
        &self.yield_pool_name
    }

    pub fn trust_deposit_name(&self) -> &str {
        &self.trust_deposit_name
    }

    pub fn community_pool_name(&self) -> &str {
        &self.community_pool_name
    }

    pub fn yield_pool(&self) -> &Address {
        &self.yield_pool
    }

    pub fn trust_deposit(&self) -> &Address {
        &self.trust_deposit
    }

    pub fn community_pool(&self) -> &Address {
        &self.community_pool
    }
}

impl Default for ModuleAccounts {
    fn default() -> Self {
        Self::new(YIELD_POOL_MODULE_NAME, MODULE_NAME, COMMUNITY_POOL_MODULE_NAME)
    }
}

/// Owner of the trust-deposit params and the dust accumulator.
///
/// The keeper holds no state of its own beyond addresses; everything it
/// reads or writes goes through the [`KvStore`] passed to each call.
#[derive(Debug, Clone)]
pub struct Keeper {
    authority: Address,
    accounts: ModuleAccounts,
}

impl Keeper {
    pub fn new(authority: Address, accounts: ModuleAccounts) -> Self {
        Self {
            authority,
            accounts,
        }
    }

    /// Address allowed to replace the params.
    pub fn authority(&self) -> &Address {
        &self.authority
    }

    pub fn accounts(&self) -> &ModuleAccounts {
        &self.accounts
    }

    // -----------------------------------------------------------------------
    // Params
    // -----------------------------------------------------------------------

    pub fn params(&self, store: &dyn KvStore) -> Result<Params, TrustDepositError> {
        PARAMS
            .may_load(store)?
            .ok_or(TrustDepositError::ParamsNotFound)
    }

    pub fn set_params(
        &self,
        store: &mut dyn KvStore,
        params: &Params,
    ) -> Result<(), TrustDepositError> {
        params.validate()?;
        PARAMS.save(store, params)?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Dust
    // -----------------------------------------------------------------------

    /// Accumulated sub-unit yield; zero when never written.
    pub fn dust(&self, store: &dyn KvStore) -> Result<Dec, TrustDepositError> {
        Ok(DUST.may_load(store)?.unwrap_or_default())
    }

    pub fn set_dust(&self, store: &mut dyn KvStore, dust: Dec) -> Result<(), TrustDepositError> {
        DUST.save(store, &dust)?;
        Ok(())
    }

    pub fn add_to_dust(
        &self,
        store: &mut dyn KvStore,
        amount: Dec,
    ) -> Result<Dec, TrustDepositError> {
        let dust = self.dust(store)?.checked_add(amount)?;
        self.set_dust(store, dust)?;
        trace!("trust deposit: dust increased by {amount} to {dust}");
        Ok(dust)
    }

    pub fn reset_dust(&self, store: &mut dyn KvStore) -> Result<(), TrustDepositError> {
        self.set_dust(store, Dec::ZERO)
    }
}
