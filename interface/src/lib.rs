//! # Ledger collaborator contracts
//!
//! The block hooks never own balances, proposals or storage. They reach the
//! ledger runtime through the traits in this crate:
//!
//! | Trait                  | Provided by                              |
//! |------------------------|------------------------------------------|
//! | [`KvStore`]            | the replicated key-value backend         |
//! | [`BankKeeper`]         | balance storage and atomic transfers     |
//! | [`GroupKeeper`]        | group / policy / proposal bookkeeping    |
//! | [`ValidatorWhitelist`] | the operator registry                    |
//!
//! In-memory implementations of all of them live in [`testing`] behind the
//! `dev-context-only-utils` feature.

pub mod address;
pub mod bank;
pub mod context;
pub mod event;
pub mod group;
pub mod store;
#[cfg(feature = "dev-context-only-utils")]
pub mod testing;
pub mod tx;
pub mod whitelist;

pub use {
    address::{Address, AddressError},
    bank::{BankError, BankKeeper},
    context::{BlockContext, ExecMode, TxContext},
    event::Event,
    group::{
        ExecResponse, ExecutorResult, GroupError, GroupInfo, GroupKeeper, GroupPolicyInfo,
        MsgExec, Page, PageRequest, Proposal, ProposalStatus,
    },
    store::{Item, KvStore, Map, StoreError},
    tx::{Msg, MsgCreateValidator, Tx},
    whitelist::ValidatorWhitelist,
};
