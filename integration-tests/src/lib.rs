//! Verana Hooks Integration Tests
//!
//! Whole-block tests of the three hooks composed by `vrn-app`, driven by the
//! in-memory store, bank and group keeper.
//!
//! # Areas Tested
//!
//! 1. **Settlement**: per-block yield, dust carry, deferral on an empty
//!    yield pool, sweep to the community pool, funding and param updates
//! 2. **Auto-execution**: voting-window boundary, at-most-once execution,
//!    failure isolation, listing-failure isolation, per-block cap
//! 3. **Admission**: pipeline order, registry-backed whitelist, first
//!    violation in message order, rejection codes
//! 4. **Lifecycle**: genesis import/export, config loading, metrics export

pub mod harness;
