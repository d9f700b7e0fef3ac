//! # Transaction admission
//!
//! An ordered chain of [`AnteDecorator`]s runs before a transaction may touch
//! state. Each gate either rejects the transaction outright or hands a
//! (possibly modified) [`TxContext`](vrn_interface::TxContext) to the rest of
//! the chain through [`Next::run`]:
//!
//! ```text
//! setup context → validate basic → message gates → deduct fee → increment sequence
//!                                  ├ proposal timing
//!                                  └ validator whitelist
//! ```
//!
//! The message gates inspect every message in transaction order; the first
//! violating message decides the rejection.

pub mod decorator;
pub mod error;
pub mod group_proposal_timing;
pub mod handler;
pub mod validator_whitelist;

pub use {
    decorator::{decorator_fn, AnteDecorator, MsgGate, Next},
    error::{AnteError, RejectCode},
    group_proposal_timing::GroupProposalTimingDecorator,
    handler::{new_ante_handler, AnteHandler, HandlerOptions, MessageGates},
    validator_whitelist::ValidatorWhitelistDecorator,
};
