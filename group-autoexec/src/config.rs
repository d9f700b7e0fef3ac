use {
    crate::error::AutoExecError,
    serde::{Deserialize, Serialize},
};

/// Tunables for the end-of-block scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoExecConfig {
    /// Page size used for every group, policy and proposal listing.
    pub page_limit: u64,

    /// Upper bound on executions per block. Eligible proposals beyond it are
    /// left for the next block. `None` executes everything eligible.
    pub max_executions_per_block: Option<u32>,
}

impl Default for AutoExecConfig {
    fn default() -> Self {
        Self {
            page_limit: 100,
            max_executions_per_block: None,
        }
    }
}

impl AutoExecConfig {
    pub fn validate(&self) -> Result<(), AutoExecError> {
        if self.page_limit == 0 {
            return Err(AutoExecError::InvalidConfig {
                reason: "page_limit must be > 0".into(),
            });
        }
        if self.max_executions_per_block == Some(0) {
            return Err(AutoExecError::InvalidConfig {
                reason: "max_executions_per_block must be > 0 when set".into(),
            });
        }
        Ok(())
    }
}
