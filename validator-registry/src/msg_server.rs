use {
    crate::{
        error::RegistryError,
        keeper::Keeper,
        state::{Validator, STATUS_ACTIVE},
    },
    log::*,
    solana_clock::UnixTimestamp,
    vrn_interface::{Address, Event, KvStore},
};

/// Register an operator under a group member id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgOnboardValidator {
    /// Usually the group policy that approved the onboarding.
    pub creator: Address,
    pub member_id: String,
    pub operator_address: Address,
    pub node_pubkey: String,
    pub term_end: UnixTimestamp,
}

impl Keeper {
    pub fn onboard_validator(
        &self,
        store: &mut dyn KvStore,
        msg: MsgOnboardValidator,
    ) -> Result<Event, RegistryError> {
        msg.creator.validate()?;
        if msg.member_id.is_empty() {
            return Err(RegistryError::EmptyMemberId);
        }

        let index = msg.member_id.clone();
        if self.has_validator(store, &index)? {
            return Err(RegistryError::AlreadyExists { index });
        }

        if msg.operator_address.is_empty() {
            return Err(RegistryError::EmptyOperatorAddress);
        }
        msg.operator_address
            .validate_with_prefix(self.valoper_prefix())
            .map_err(|source| RegistryError::InvalidOperatorAddress {
                address: msg.operator_address.clone(),
                source,
            })?;

        let validator = Validator {
            index: index.clone(),
            member_id: msg.member_id,
            operator_address: msg.operator_address,
            consensus_pubkey: msg.node_pubkey,
            status: STATUS_ACTIVE.to_string(),
            term_end: msg.term_end,
        };
        self.set_validator(store, &validator)?;

        info!(
            "validator registry: onboarded {} as member {index}",
            validator.operator_address
        );
        Ok(Event::new("validator_onboarded")
            .with_attribute("index", &index)
            .with_attribute("member_id", &validator.member_id)
            .with_attribute("operator_address", &validator.operator_address))
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        assert_matches::assert_matches,
        vrn_interface::{testing::MemStore, AddressError},
    };

    fn msg(member_id: &str, operator: &str) -> MsgOnboardValidator {
        MsgOnboardValidator {
            creator: Address::from("verana1policy"),
            member_id: member_id.to_string(),
            operator_address: Address::from(operator),
            node_pubkey: "pubkey".to_string(),
            term_end: 1_800_000_000,
        }
    }

    #[test]
    fn test_onboard_stores_active_record() {
        let keeper = Keeper::new("veranavaloper");
        let mut store = MemStore::default();
        let event = keeper
            .onboard_validator(&mut store, msg("member-1", "veranavaloper1alice"))
            .unwrap();

        assert_eq!(event.kind, "validator_onboarded");
        assert_eq!(event.attribute("index"), Some("member-1"));
        assert_eq!(event.attribute("member_id"), Some("member-1"));
        assert_eq!(event.attribute("operator_address"), Some("veranavaloper1alice"));

        let stored = keeper.validator(&store, "member-1").unwrap();
        assert_eq!(stored.status, "active");
        assert_eq!(stored.consensus_pubkey, "pubkey");
        assert_eq!(stored.term_end, 1_800_000_000);
    }

    #[test]
    fn test_onboard_rejects_duplicate_index() {
        let keeper = Keeper::new("veranavaloper");
        let mut store = MemStore::default();
        keeper
            .onboard_validator(&mut store, msg("member-1", "veranavaloper1alice"))
            .unwrap();
        assert_matches!(
            keeper.onboard_validator(&mut store, msg("member-1", "veranavaloper1bob")),
            Err(RegistryError::AlreadyExists { index }) if index == "member-1"
        );
    }

    #[test]
    fn test_onboard_rejects_bad_operator() {
        let keeper = Keeper::new("veranavaloper");
        let mut store = MemStore::default();
        assert_matches!(
            keeper.onboard_validator(&mut store, msg("m", "")),
            Err(RegistryError::EmptyOperatorAddress)
        );
        assert_matches!(
            keeper.onboard_validator(&mut store, msg("m", "verana1alice")),
            Err(RegistryError::InvalidOperatorAddress {
                source: AddressError::WrongPrefix { .. },
                ..
            })
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_onboard_rejects_bad_creator() {
        let keeper = Keeper::new("veranavaloper");
        let mut store = MemStore::default();
        let mut bad = msg("m", "veranavaloper1alice");
        bad.creator = Address::from("");
        assert_matches!(
            keeper.onboard_validator(&mut store, bad),
            Err(RegistryError::InvalidCreator(AddressError::Empty))
        );
        assert_matches!(
            keeper.onboard_validator(&mut store, msg("", "veranavaloper1alice")),
            Err(RegistryError::EmptyMemberId)
        );
    }
}
