//! Process-wide logging setup on top of `env_logger`.
//!
//! Every crate in the workspace logs through the `log` facade. Binaries and
//! test harnesses call one of the `setup*` functions once; later calls are
//! no-ops so tests may call them freely.

use {
    env_logger::{Builder, Env},
    std::sync::Once,
};

/// Filter used when neither `RUST_LOG` nor an explicit filter is given.
pub const DEFAULT_FILTER: &str = "info";

static INIT: Once = Once::new();

fn init(builder: &mut Builder) {
    INIT.call_once(|| {
        // Another logger may already be installed by an embedding process.
        let _ = builder.format_timestamp_nanos().try_init();
    });
}

/// Configures logging with a specific filter overriding `RUST_LOG`.
///
/// `filter` uses the `env_logger` directive syntax, e.g.
/// `"vrn_trust_deposit=debug,vrn_ante=warn"`.
pub fn setup_with(filter: &str) {
    let mut builder = Builder::new();
    builder.parse_filters(filter);
    init(&mut builder);
}

/// Configures logging from `RUST_LOG`, falling back to `filter` when it is unset.
pub fn setup_with_default(filter: &str) {
    init(&mut Builder::from_env(Env::new().default_filter_or(filter)));
}

/// Configures logging from `RUST_LOG` with [`DEFAULT_FILTER`] as the fallback.
pub fn setup_with_default_filter() {
    setup_with_default(DEFAULT_FILTER);
}

/// Configures logging from `RUST_LOG` only; without it only errors are shown.
pub fn setup() {
    setup_with_default("error");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_is_idempotent() {
        setup_with("vrn_logger=debug");
        setup_with_default_filter();
        setup();
        log::info!("logger initialised");
    }
}
