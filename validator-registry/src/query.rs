use {
    crate::{
        error::RegistryError,
        keeper::{Keeper, VALIDATORS},
        state::Validator,
    },
    vrn_interface::{KvStore, Page, PageRequest},
};

impl Keeper {
    pub fn validator(&self, store: &dyn KvStore, index: &str) -> Result<Validator, RegistryError> {
        VALIDATORS
            .may_load(store, index)?
            .ok_or_else(|| RegistryError::NotFound {
                index: index.to_string(),
            })
    }

    pub fn validators(
        &self,
        store: &dyn KvStore,
        page: PageRequest,
    ) -> Result<Page<Validator>, RegistryError> {
        if page.limit == 0 {
            return Err(RegistryError::InvalidPage);
        }
        Ok(Page::paginate(self.all_validators(store)?, page))
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::msg_server::MsgOnboardValidator,
        assert_matches::assert_matches,
        vrn_interface::{testing::MemStore, Address},
    };

    fn populated() -> (Keeper, MemStore) {
        let keeper = Keeper::new("veranavaloper");
        let mut store = MemStore::default();
        for member in ["a", "b", "c", "d", "e"] {
            keeper
                .onboard_validator(
                    &mut store,
                    MsgOnboardValidator {
                        creator: Address::from("verana1policy"),
                        member_id: member.to_string(),
                        operator_address: Address::new(format!("veranavaloper1{member}")),
                        node_pubkey: String::new(),
                        term_end: 0,
                    },
                )
                .unwrap();
        }
        (keeper, store)
    }

    #[test]
    fn test_validator_not_found() {
        let (keeper, store) = populated();
        assert_eq!(keeper.validator(&store, "c").unwrap().member_id, "c");
        assert_matches!(
            keeper.validator(&store, "z"),
            Err(RegistryError::NotFound { index }) if index == "z"
        );
    }

    #[test]
    fn test_validators_paginated() {
        let (keeper, store) = populated();
        let first = keeper.validators(&store, PageRequest::first(2)).unwrap();
        let indexes: Vec<_> = first.items.iter().map(|v| v.index.as_str()).collect();
        assert_eq!(indexes, ["a", "b"]);

        let mut seen = first.items.len();
        let mut next = first.next;
        while let Some(request) = next {
            let page = keeper.validators(&store, request).unwrap();
            seen += page.items.len();
            next = page.next;
        }
        assert_eq!(seen, 5);
        assert_matches!(
            keeper.validators(&store, PageRequest::first(0)),
            Err(RegistryError::InvalidPage)
        );
    }
}
