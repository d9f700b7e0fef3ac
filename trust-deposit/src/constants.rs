//! Module names, store keys and defaults.

/// Module name of the trust-deposit pool, the settlement destination.
pub const MODULE_NAME: &str = "trust_deposit";

/// Module name of the yield pool, the settlement source.
pub const YIELD_POOL_MODULE_NAME: &str = "yield_pool";

/// Module name of the community pool that receives unspent yield.
pub const COMMUNITY_POOL_MODULE_NAME: &str = "community_pool";

/// Blocks per year assumed for a ~5 s block time: `365.25 × 24 × 3600 / 5`.
pub const DEFAULT_BLOCKS_PER_YEAR: u64 = 6_311_520;

pub const PARAMS_KEY: &[u8] = b"td/params";
pub const DUST_KEY: &[u8] = b"td/dust";

/// Store discriminators.
pub const PARAMS_DISCRIMINATOR: u8 = 1;
pub const DUST_DISCRIMINATOR: u8 = 2;
