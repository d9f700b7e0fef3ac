//! # Block lifecycle
//!
//! [`App`] wires the hooks into the three points of a block's life:
//!
//! | Hook          | Runs                                 | Crate                    |
//! |---------------|--------------------------------------|--------------------------|
//! | `check_tx`    | before a transaction touches state   | `vrn-ante`               |
//! | `begin_block` | once at the start of every block     | `vrn-trust-deposit`      |
//! | `end_block`   | once at the end of every block       | `vrn-group-autoexec`     |
//!
//! Every hook records its outcome in the shared [`HookMetrics`](vrn_monitoring::HookMetrics).

pub mod app;
pub mod config;
pub mod error;
pub mod genesis;

pub use {
    app::{App, ExternalDecorators},
    config::AppConfig,
    error::AppError,
    genesis::AppGenesis,
};
