//! # Proposal auto-execution
//!
//! At the end of every block the [`AutoExecutor`] walks every group, every
//! decision policy of the group and every proposal of the policy, and
//! executes each proposal that is
//!
//! * past its voting period,
//! * not yet executed (executor result `NotRun`), and
//! * accepted.
//!
//! Nothing is persisted between blocks: a proposal whose execution failed is
//! marked `Failure` by the group keeper and is therefore never retried.
//!
//! The scan never fails the block. A group or policy that cannot be listed is
//! logged and skipped, and is tried again in the next block.

pub mod config;
pub mod error;
pub mod executor;

pub use {
    config::AutoExecConfig,
    error::AutoExecError,
    executor::{AutoExecutor, ExecutionOutcome, ExecutionReport},
};
