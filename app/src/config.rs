use {
    crate::error::AppError,
    serde::{Deserialize, Serialize},
    std::{collections::BTreeSet, path::Path},
    vrn_group_autoexec::AutoExecConfig,
    vrn_interface::Address,
    vrn_trust_deposit::constants::{
        COMMUNITY_POOL_MODULE_NAME, MODULE_NAME, YIELD_POOL_MODULE_NAME,
    },
};

/// Module that owns parameter updates unless configured otherwise.
pub const DEFAULT_AUTHORITY_MODULE: &str = "gov";

pub const DEFAULT_VALOPER_PREFIX: &str = "veranavaloper";

/// Node-local settings for the hooks.
///
/// Loaded from JSON; every field may be omitted and falls back to
/// [`AppConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Address allowed to update trust-deposit parameters.
    pub authority: Address,

    pub yield_pool_module: String,
    pub trust_deposit_module: String,
    pub community_pool_module: String,

    /// Human-readable prefix every onboarded operator address must carry.
    pub valoper_prefix: String,

    pub autoexec: AutoExecConfig,

    /// `env_logger` filter directives handed to `vrn-logger` by the host.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            authority: Address::module(DEFAULT_AUTHORITY_MODULE),
            yield_pool_module: YIELD_POOL_MODULE_NAME.to_string(),
            trust_deposit_module: MODULE_NAME.to_string(),
            community_pool_module: COMMUNITY_POOL_MODULE_NAME.to_string(),
            valoper_prefix: DEFAULT_VALOPER_PREFIX.to_string(),
            autoexec: AutoExecConfig::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.authority.validate()?;

        let modules = [
            self.yield_pool_module.as_str(),
            self.trust_deposit_module.as_str(),
            self.community_pool_module.as_str(),
        ];
        if modules.iter().any(|name| name.is_empty()) {
            return Err(AppError::InvalidConfig {
                reason: "module account names must not be empty".into(),
            });
        }
        if modules.iter().collect::<BTreeSet<_>>().len() != modules.len() {
            return Err(AppError::InvalidConfig {
                reason: format!("module account names must be distinct, got {modules:?}"),
            });
        }

        if self.valoper_prefix.is_empty() {
            return Err(AppError::InvalidConfig {
                reason: "valoper_prefix must not be empty".into(),
            });
        }
        self.autoexec.validate()?;
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path).map_err(|source| AppError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*, assert_matches::assert_matches, test_case::test_case,
        vrn_group_autoexec::AutoExecError,
    };

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().unwrap();
        assert!(config.authority.as_str().starts_with("mod1"));
        assert_eq!(config.trust_deposit_module, "trust_deposit");
        assert_eq!(config.autoexec.page_limit, 100);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = AppConfig::from_json(
            r#"{ "valoper_prefix": "testvaloper", "autoexec": { "max_executions_per_block": 5 } }"#,
        )
        .unwrap();
        assert_eq!(config.valoper_prefix, "testvaloper");
        assert_eq!(config.autoexec.max_executions_per_block, Some(5));
        assert_eq!(config.autoexec.page_limit, 100);
        assert_eq!(config.yield_pool_module, "yield_pool");
    }

    #[test]
    fn test_json_round_trip() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(AppConfig::from_json(&json).unwrap(), config);
    }

    #[test_case(r#"{ "community_pool_module": "yield_pool" }"# ; "duplicate module names")]
    #[test_case(r#"{ "trust_deposit_module": "" }"# ; "empty module name")]
    #[test_case(r#"{ "valoper_prefix": "" }"# ; "empty valoper prefix")]
    fn test_rejects_invalid_config(json: &str) {
        assert_matches!(
            AppConfig::from_json(json),
            Err(AppError::InvalidConfig { .. })
        );
    }

    #[test]
    fn test_rejects_bad_authority() {
        let config = AppConfig {
            authority: Address::from("Not An Address"),
            ..AppConfig::default()
        };
        assert_matches!(config.validate(), Err(AppError::InvalidAuthority(_)));
    }

    #[test]
    fn test_rejects_bad_autoexec_config() {
        assert_matches!(
            AppConfig::from_json(r#"{ "autoexec": { "page_limit": 0 } }"#),
            Err(AppError::AutoExec(AutoExecError::InvalidConfig { .. }))
        );
    }

    #[test]
    fn test_malformed_json() {
        assert_matches!(AppConfig::from_json("{ not json"), Err(AppError::Json(_)));
    }

    #[test]
    fn test_load_missing_file() {
        assert_matches!(
            AppConfig::load(Path::new("/nonexistent/vrn-app.json")),
            Err(AppError::ConfigIo { .. })
        );
    }
}
