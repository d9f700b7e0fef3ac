use {
    crate::{
        decorator::{run_msg_gate, AnteDecorator, MsgGate, Next},
        error::AnteError,
    },
    vrn_interface::{Msg, Tx, TxContext, ValidatorWhitelist},
};

/// Only registered operators may create a validator.
pub struct ValidatorWhitelistDecorator<'a> {
    whitelist: &'a dyn ValidatorWhitelist,
}

impl<'a> ValidatorWhitelistDecorator<'a> {
    pub fn new(whitelist: &'a dyn ValidatorWhitelist) -> Self {
        Self { whitelist }
    }
}

impl MsgGate for ValidatorWhitelistDecorator<'_> {
    fn check_msg(&self, _ctx: &TxContext, msg: &Msg) -> Result<(), AnteError> {
        match msg {
            Msg::CreateValidator(create)
                if !self.whitelist.is_whitelisted(&create.validator_address) =>
            {
                Err(AnteError::ValidatorNotWhitelisted {
                    address: create.validator_address.clone(),
                })
            }
            _ => Ok(()),
        }
    }
}

impl AnteDecorator for ValidatorWhitelistDecorator<'_> {
    fn ante_handle(
        &self,
        ctx: TxContext,
        tx: &Tx,
        simulate: bool,
        next: Next<'_>,
    ) -> Result<TxContext, AnteError> {
        run_msg_gate(self, ctx, tx, simulate, next)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        assert_matches::assert_matches,
        vrn_interface::{Address, MsgCreateValidator},
    };

    fn create(address: &str) -> Msg {
        Msg::CreateValidator(MsgCreateValidator {
            validator_address: Address::from(address),
            moniker: "node".to_string(),
        })
    }

    fn allow_alice(address: &Address) -> bool {
        address.as_str() == "veranavaloper1alice"
    }

    fn handle(msgs: Vec<Msg>) -> Result<TxContext, AnteError> {
        ValidatorWhitelistDecorator::new(&allow_alice).ante_handle(
            TxContext::default(),
            &Tx::new(msgs),
            false,
            Next::new(&[]),
        )
    }

    #[test]
    fn test_whitelisted_operator_passes() {
        handle(vec![create("veranavaloper1alice")]).unwrap();
        handle(vec![]).unwrap();
    }

    #[test]
    fn test_first_unlisted_operator_is_named() {
        assert_matches!(
            handle(vec![
                create("veranavaloper1alice"),
                create("veranavaloper1bob"),
                create("veranavaloper1carol"),
            ]),
            Err(AnteError::ValidatorNotWhitelisted { address })
                if address.as_str() == "veranavaloper1bob"
        );
    }
}
