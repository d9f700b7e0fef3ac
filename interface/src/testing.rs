//! In-memory collaborators for tests and local tooling.

use {
    crate::{
        address::Address,
        bank::{BankError, BankKeeper},
        context::BlockContext,
        group::{
            ExecResponse, ExecutorResult, GroupError, GroupInfo, GroupKeeper, GroupPolicyInfo,
            MsgExec, Page, PageRequest, Proposal, ProposalStatus,
        },
        store::{KvStore, StoreError},
    },
    std::collections::{BTreeMap, BTreeSet},
};

/// `BTreeMap`-backed [`KvStore`].
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
    /// When set, every operation fails with [`StoreError::Backend`].
    pub fail: bool,
}

impl MemStore {
    fn check(&self) -> Result<(), StoreError> {
        if self.fail {
            Err(StoreError::Backend("injected store failure".to_string()))
        } else {
            Ok(())
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        self.check()?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &[u8], value: Vec<u8>) -> Result<(), StoreError> {
        self.check()?;
        self.entries.insert(key.to_vec(), value);
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StoreError> {
        self.check()?;
        self.entries.remove(key);
        Ok(())
    }

    fn prefix_iter(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>, StoreError> {
        self.check()?;
        Ok(self
            .entries
            .range(prefix.to_vec()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }
}

/// Single-denomination [`BankKeeper`] that records every transfer.
#[derive(Debug, Clone, Default)]
pub struct MemBank {
    balances: BTreeMap<Address, u64>,
    pub transfers: Vec<(Address, Address, u64)>,
    pub fail_balance: bool,
    pub fail_send: bool,
}

impl MemBank {
    pub fn set_balance(&mut self, address: &Address, amount: u64) {
        self.balances.insert(address.clone(), amount);
    }

    /// Mint `amount` into `address`.
    pub fn fund(&mut self, address: &Address, amount: u64) {
        let balance = self.balances.entry(address.clone()).or_default();
        *balance = balance.saturating_add(amount);
    }

    pub fn balance_of(&self, address: &Address) -> u64 {
        self.balances.get(address).copied().unwrap_or_default()
    }

    pub fn total_supply(&self) -> u128 {
        self.balances.values().map(|b| u128::from(*b)).sum()
    }
}

impl BankKeeper for MemBank {
    fn balance(&self, address: &Address) -> Result<u64, BankError> {
        if self.fail_balance {
            return Err(BankError::Unavailable("injected balance failure".to_string()));
        }
        Ok(self.balance_of(address))
    }

    fn send(&mut self, from: &Address, to: &Address, amount: u64) -> Result<(), BankError> {
        if self.fail_send {
            return Err(BankError::Unavailable("injected send failure".to_string()));
        }
        let from_balance = self.balance_of(from);
        let debited = from_balance
            .checked_sub(amount)
            .ok_or_else(|| BankError::InsufficientFunds {
                address: from.clone(),
                balance: from_balance,
                required: amount,
            })?;
        if from != to {
            let credited = self
                .balance_of(to)
                .checked_add(amount)
                .ok_or_else(|| BankError::Overflow { address: to.clone() })?;
            self.balances.insert(from.clone(), debited);
            self.balances.insert(to.clone(), credited);
        }
        self.transfers.push((from.clone(), to.clone(), amount));
        Ok(())
    }
}

/// [`GroupKeeper`] over in-memory maps.
///
/// `exec` records every call, then marks the proposal `Success`, or `Failure`
/// when its id is in `failing`. Ids in `erroring` make `exec` return an error
/// without touching the proposal.
///
/// `fail_listing` breaks every listing. Listing the policies of a group in
/// `unlistable_groups`, or the proposals of a policy in `unlistable_policies`,
/// fails on its own.
#[derive(Debug, Clone, Default)]
pub struct MemGroupKeeper {
    groups: BTreeMap<u64, GroupInfo>,
    policies: BTreeMap<Address, GroupPolicyInfo>,
    proposals: BTreeMap<u64, Proposal>,
    pub exec_calls: Vec<MsgExec>,
    pub failing: BTreeSet<u64>,
    pub erroring: BTreeSet<u64>,
    pub fail_listing: bool,
    pub unlistable_groups: BTreeSet<u64>,
    pub unlistable_policies: BTreeSet<Address>,
}

impl MemGroupKeeper {
    pub fn add_group(&mut self, id: u64, admin: Address) {
        self.groups.insert(id, GroupInfo { id, admin });
    }

    pub fn add_policy(&mut self, group_id: u64, address: Address) {
        self.policies
            .insert(address.clone(), GroupPolicyInfo { address, group_id });
    }

    pub fn add_proposal(&mut self, proposal: Proposal) {
        self.proposals.insert(proposal.id, proposal);
    }

    pub fn proposal_mut(&mut self, id: u64) -> Option<&mut Proposal> {
        self.proposals.get_mut(&id)
    }

    pub fn exec_count(&self, id: u64) -> usize {
        self.exec_calls
            .iter()
            .filter(|msg| msg.proposal_id == id)
            .count()
    }

    fn check_listing(&self, page: PageRequest) -> Result<(), GroupError> {
        if self.fail_listing {
            return Err(GroupError::Unavailable("injected listing failure".to_string()));
        }
        if page.limit == 0 {
            return Err(GroupError::InvalidPage("limit must be positive".to_string()));
        }
        Ok(())
    }
}

impl GroupKeeper for MemGroupKeeper {
    fn proposal(&self, id: u64) -> Result<Proposal, GroupError> {
        self.proposals
            .get(&id)
            .cloned()
            .ok_or(GroupError::ProposalNotFound { id })
    }

    fn groups(&self, page: PageRequest) -> Result<Page<GroupInfo>, GroupError> {
        self.check_listing(page)?;
        Ok(Page::paginate(self.groups.values().cloned(), page))
    }

    fn group_policies_by_group(
        &self,
        group_id: u64,
        page: PageRequest,
    ) -> Result<Page<GroupPolicyInfo>, GroupError> {
        self.check_listing(page)?;
        if self.unlistable_groups.contains(&group_id) {
            return Err(GroupError::Unavailable(format!(
                "injected policy listing failure for group {group_id}"
            )));
        }
        if !self.groups.contains_key(&group_id) {
            return Err(GroupError::GroupNotFound { id: group_id });
        }
        Ok(Page::paginate(
            self.policies
                .values()
                .filter(|policy| policy.group_id == group_id)
                .cloned(),
            page,
        ))
    }

    fn proposals_by_group_policy(
        &self,
        address: &Address,
        page: PageRequest,
    ) -> Result<Page<Proposal>, GroupError> {
        self.check_listing(page)?;
        if self.unlistable_policies.contains(address) {
            return Err(GroupError::Unavailable(format!(
                "injected proposal listing failure for policy {address}"
            )));
        }
        Ok(Page::paginate(
            self.proposals
                .values()
                .filter(|proposal| &proposal.group_policy_address == address)
                .cloned(),
            page,
        ))
    }

    fn exec(&mut self, ctx: &BlockContext, msg: MsgExec) -> Result<ExecResponse, GroupError> {
        let id = msg.proposal_id;
        self.exec_calls.push(msg);
        if self.erroring.contains(&id) {
            return Err(GroupError::Execution {
                id,
                reason: "injected execution error".to_string(),
            });
        }
        let failing = self.failing.contains(&id);
        let proposal = self
            .proposals
            .get_mut(&id)
            .ok_or(GroupError::ProposalNotFound { id })?;
        if proposal.status != ProposalStatus::Accepted {
            return Err(GroupError::Execution {
                id,
                reason: format!("proposal status is {}", proposal.status),
            });
        }
        if ctx.time < proposal.voting_period_end {
            return Err(GroupError::Execution {
                id,
                reason: "voting period has not ended".to_string(),
            });
        }
        proposal.executor_result = if failing {
            ExecutorResult::Failure
        } else {
            ExecutorResult::Success
        };
        Ok(ExecResponse {
            result: proposal.executor_result,
        })
    }
}

#[cfg(test)]
mod tests {
    use {super::*, assert_matches::assert_matches};

    #[test]
    fn test_mem_bank_send() {
        let alice = Address::from("verana1alice");
        let bob = Address::from("verana1bob");
        let mut bank = MemBank::default();
        bank.fund(&alice, 10);

        bank.send(&alice, &bob, 4).unwrap();
        assert_eq!(bank.balance_of(&alice), 6);
        assert_eq!(bank.balance_of(&bob), 4);

        assert_matches!(
            bank.send(&alice, &bob, 7),
            Err(BankError::InsufficientFunds { balance: 6, required: 7, .. })
        );
        assert_eq!(bank.balance_of(&alice), 6);
        assert_eq!(bank.total_supply(), 10);
        assert_eq!(bank.transfers.len(), 1);
    }

    #[test]
    fn test_mem_store_prefix_iter() {
        let mut store = MemStore::default();
        store.set(b"a/1", vec![1]).unwrap();
        store.set(b"a/2", vec![2]).unwrap();
        store.set(b"b/1", vec![3]).unwrap();
        let entries = store.prefix_iter(b"a/").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, b"a/1".to_vec());

        store.fail = true;
        assert_matches!(store.get(b"a/1"), Err(StoreError::Backend(_)));
    }

    #[test]
    fn test_mem_group_keeper_exec() {
        let policy = Address::from("verana1policy");
        let mut groups = MemGroupKeeper::default();
        groups.add_group(1, Address::from("verana1admin"));
        groups.add_policy(1, policy.clone());
        groups.add_proposal(Proposal {
            id: 5,
            group_policy_address: policy.clone(),
            status: ProposalStatus::Accepted,
            voting_period_end: 100,
            executor_result: ExecutorResult::NotRun,
        });

        let msg = MsgExec {
            proposal_id: 5,
            executor: policy.clone(),
        };
        assert_matches!(
            groups.exec(&BlockContext::new(1, 99), msg.clone()),
            Err(GroupError::Execution { id: 5, .. })
        );
        let response = groups.exec(&BlockContext::new(2, 100), msg).unwrap();
        assert_eq!(response.result, ExecutorResult::Success);
        assert_eq!(groups.proposal(5).unwrap().executor_result, ExecutorResult::Success);
        assert_eq!(groups.exec_count(5), 2);

        let page = groups
            .proposals_by_group_policy(&policy, PageRequest::first(10))
            .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_matches!(
            groups.group_policies_by_group(9, PageRequest::first(10)),
            Err(GroupError::GroupNotFound { id: 9 })
        );
    }
}
