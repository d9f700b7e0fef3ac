use {
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    sha2::{Digest, Sha256},
    std::fmt,
    thiserror::Error,
};

/// Human-readable prefix of every derived module account address.
pub const MODULE_ADDRESS_PREFIX: &str = "mod";

/// Number of hash bytes kept in a derived module address.
const MODULE_ADDRESS_LEN: usize = 20;

/// A bech32-style account address: `<hrp>1<data>`, lowercase alphanumerics.
///
/// Prefixes never contain `1`; the data part may (module addresses are hex).
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Address(String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("empty address")]
    Empty,

    #[error("address {0:?} has no '1' separator between prefix and data")]
    MissingSeparator(String),

    #[error("address {0:?} contains characters outside [a-z0-9]")]
    InvalidCharacter(String),

    #[error("address {address:?} does not carry the {expected:?} prefix")]
    WrongPrefix { address: String, expected: String },
}

impl Address {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Deterministic address of a named module account:
    /// `mod1` followed by the hex of the first 20 bytes of `sha256(name)`.
    pub fn module(name: &str) -> Self {
        let digest = Sha256::digest(name.as_bytes());
        Self(format!(
            "{MODULE_ADDRESS_PREFIX}1{}",
            hex::encode(&digest[..MODULE_ADDRESS_LEN])
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The part before the first `1` separator, if any.
    pub fn hrp(&self) -> Option<&str> {
        self.0
            .split_once('1')
            .map(|(hrp, _)| hrp)
            .filter(|hrp| !hrp.is_empty())
    }

    /// Structural check: non-empty, lowercase alphanumerics, non-empty
    /// prefix and data around the separator.
    pub fn validate(&self) -> Result<(), AddressError> {
        if self.0.is_empty() {
            return Err(AddressError::Empty);
        }
        if !self
            .0
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        {
            return Err(AddressError::InvalidCharacter(self.0.clone()));
        }
        match self.0.split_once('1') {
            Some((hrp, data)) if !hrp.is_empty() && !data.is_empty() => Ok(()),
            _ => Err(AddressError::MissingSeparator(self.0.clone())),
        }
    }

    /// [`validate`](Self::validate) plus an exact prefix match.
    pub fn validate_with_prefix(&self, prefix: &str) -> Result<(), AddressError> {
        self.validate()?;
        if self.hrp() == Some(prefix) {
            Ok(())
        } else {
            Err(AddressError::WrongPrefix {
                address: self.0.clone(),
                expected: prefix.to_string(),
            })
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}

impl From<String> for Address {
    fn from(address: String) -> Self {
        Self(address)
    }
}
