use {
    crate::constants::DEFAULT_BLOCKS_PER_YEAR,
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    thiserror::Error,
    vrn_math::{Dec, MathError},
};

/// Governance-controlled settlement parameters, read once per block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct Params {
    /// Total principal earning yield, in whole units.
    pub trust_deposit_value: u64,

    /// Annual yield rate in `[0, 1]`.
    pub trust_deposit_yield_rate: Dec,

    /// Divisor turning the annual yield into a per-block figure.
    pub blocks_per_year: u64,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    #[error("yield rate {rate} is above 1")]
    RateAboveOne { rate: Dec },

    #[error("blocks per year must be greater than zero")]
    ZeroBlocksPerYear,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            trust_deposit_value: 0,
            trust_deposit_yield_rate: Dec::ZERO,
            blocks_per_year: DEFAULT_BLOCKS_PER_YEAR,
        }
    }
}

impl Params {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.trust_deposit_yield_rate > Dec::ONE {
            return Err(ParamsError::RateAboveOne {
                rate: self.trust_deposit_yield_rate,
            });
        }
        if self.blocks_per_year == 0 {
            return Err(ParamsError::ZeroBlocksPerYear);
        }
        Ok(())
    }

    /// Yield earned by the whole deposit in a single block.
    ///
    /// ```text
    /// Dec(trust_deposit_value) × trust_deposit_yield_rate ÷ blocks_per_year
    /// ```
    ///
    /// Both steps round half-to-even at the 18th decimal.
    pub fn per_block_yield(&self) -> Result<Dec, MathError> {
        Dec::from_int(self.trust_deposit_value)
            .checked_mul(self.trust_deposit_yield_rate)?
            .checked_quo_int(self.blocks_per_year)
    }
}
