//! Transaction message handlers.

use {
    crate::{error::TrustDepositError, keeper::Keeper, params::Params},
    log::*,
    vrn_interface::{Address, BankKeeper, Event, KvStore},
    vrn_math::MathError,
};

/// Move `amount` from `creator` into the module account named `module`.
///
/// Funding the trust-deposit module itself also raises the principal that
/// earns yield.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgFundModule {
    pub creator: Address,
    pub module: String,
    pub amount: u64,
}

/// Replace the module params. Only the keeper's authority may send it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgUpdateParams {
    pub authority: Address,
    pub params: Params,
}

impl Keeper {
    pub fn fund_module(
        &self,
        store: &mut dyn KvStore,
        bank: &mut dyn BankKeeper,
        msg: MsgFundModule,
    ) -> Result<Event, TrustDepositError> {
        msg.creator.validate()?;
        if msg.module.is_empty() {
            return Err(TrustDepositError::EmptyModuleName);
        }
        if msg.amount == 0 {
            return Err(TrustDepositError::ZeroAmount);
        }

        let accounts = self.accounts();
        let is_trust_deposit = msg.module == accounts.trust_deposit_name();

        // New principal is resolved before any funds move.
        let params = if is_trust_deposit {
            let params = self.params(store)?;
            let trust_deposit_value = params
                .trust_deposit_value
                .checked_add(msg.amount)
                .ok_or(MathError::Overflow)?;
            Some(Params {
                trust_deposit_value,
                ..params
            })
        } else {
            None
        };

        let module_address = Address::module(&msg.module);
        bank.send(&msg.creator, &module_address, msg.amount)?;
        if let Some(params) = &params {
            self.set_params(store, params)?;
        }

        info!(
            "trust deposit: {} funded module {} with {}",
            msg.creator, msg.module, msg.amount
        );
        Ok(Event::new("fund_module")
            .with_attribute("creator", &msg.creator)
            .with_attribute("module", &msg.module)
            .with_attribute("amount", msg.amount))
    }

    pub fn update_params(
        &self,
        store: &mut dyn KvStore,
        msg: MsgUpdateParams,
    ) -> Result<(), TrustDepositError> {
        if &msg.authority != self.authority() {
            return Err(TrustDepositError::InvalidAuthority {
                expected: self.authority().clone(),
                got: msg.authority,
            });
        }
        self.set_params(store, &msg.params)?;
        info!("trust deposit: params updated to {:?}", msg.params);
        Ok(())
    }
}
