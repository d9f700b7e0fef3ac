//! Verana Hooks Property-Based Invariant Tests
//!
//! Uses proptest to verify the hooks' invariants across:
//! - Yield settlement: dust conservation, threshold behaviour, deferral, sweep
//! - Admission: first violation in message order decides
//! - Auto-execution: at-most-once execution across repeated scans

pub mod admission_invariants;
pub mod autoexec_invariants;
pub mod settlement_invariants;
