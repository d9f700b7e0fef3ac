//! Key-value storage contract and typed accessors.
//!
//! Every value is written as a one-byte discriminator followed by its Borsh
//! encoding. Reading a value under the wrong discriminator is an error rather
//! than a silent misinterpretation.

use {
    borsh::{BorshDeserialize, BorshSerialize},
    std::marker::PhantomData,
    thiserror::Error,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("no value stored under key {key}")]
    NotFound { key: String },

    #[error("value under key {key} is empty")]
    EmptyValue { key: String },

    #[error("value under key {key} has discriminator {found}, expected {expected}")]
    InvalidDiscriminator { key: String, expected: u8, found: u8 },

    #[error("failed to encode or decode value under key {key}: {message}")]
    Codec { key: String, message: String },

    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Byte-oriented storage backend.
///
/// `prefix_iter` returns entries in ascending key order so that every replica
/// walks them identically.
pub trait KvStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;

    fn set(&mut self, key: &[u8], value: Vec<u8>) -> Result<(), StoreError>;

    fn delete(&mut self, key: &[u8]) -> Result<(), StoreError>;

    fn has(&self, key: &[u8]) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }

    fn prefix_iter(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>, StoreError>;
}

fn display_key(key: &[u8]) -> String {
    String::from_utf8_lossy(key).into_owned()
}

/// Encode `value` behind `discriminator`.
pub fn encode<T: BorshSerialize>(
    key: &[u8],
    discriminator: u8,
    value: &T,
) -> Result<Vec<u8>, StoreError> {
    let mut data = vec![discriminator];
    value
        .serialize(&mut data)
        .map_err(|err| StoreError::Codec {
            key: display_key(key),
            message: err.to_string(),
        })?;
    Ok(data)
}

/// Decode a value written by [`encode`].
pub fn decode<T: BorshDeserialize>(
    key: &[u8],
    discriminator: u8,
    data: &[u8],
) -> Result<T, StoreError> {
    let Some((&found, body)) = data.split_first() else {
        return Err(StoreError::EmptyValue {
            key: display_key(key),
        });
    };
    if found != discriminator {
        return Err(StoreError::InvalidDiscriminator {
            key: display_key(key),
            expected: discriminator,
            found,
        });
    }
    T::try_from_slice(body).map_err(|err| StoreError::Codec {
        key: display_key(key),
        message: err.to_string(),
    })
}

/// A single typed value stored under a fixed key.
pub struct Item<T> {
    key: &'static [u8],
    discriminator: u8,
    _marker: PhantomData<fn() -> T>,
}

impl<T: BorshSerialize + BorshDeserialize> Item<T> {
    pub const fn new(key: &'static [u8], discriminator: u8) -> Self {
        Self {
            key,
            discriminator,
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &'static [u8] {
        self.key
    }

    pub fn may_load(&self, store: &dyn KvStore) -> Result<Option<T>, StoreError> {
        store
            .get(self.key)?
            .map(|data| decode(self.key, self.discriminator, &data))
            .transpose()
    }

    pub fn load(&self, store: &dyn KvStore) -> Result<T, StoreError> {
        self.may_load(store)?.ok_or_else(|| StoreError::NotFound {
            key: display_key(self.key),
        })
    }

    pub fn save(&self, store: &mut dyn KvStore, value: &T) -> Result<(), StoreError> {
        let data = encode(self.key, self.discriminator, value)?;
        store.set(self.key, data)
    }

    pub fn remove(&self, store: &mut dyn KvStore) -> Result<(), StoreError> {
        store.delete(self.key)
    }
}

/// Typed values stored under `<prefix><string key>`.
pub struct Map<T> {
    prefix: &'static [u8],
    discriminator: u8,
    _marker: PhantomData<fn() -> T>,
}

impl<T: BorshSerialize + BorshDeserialize> Map<T> {
    pub const fn new(prefix: &'static [u8], discriminator: u8) -> Self {
        Self {
            prefix,
            discriminator,
            _marker: PhantomData,
        }
    }

    fn full_key(&self, key: &str) -> Vec<u8> {
        let mut full = Vec::with_capacity(self.prefix.len().saturating_add(key.len()));
        full.extend_from_slice(self.prefix);
        full.extend_from_slice(key.as_bytes());
        full
    }

    pub fn has(&self, store: &dyn KvStore, key: &str) -> Result<bool, StoreError> {
        store.has(&self.full_key(key))
    }

    pub fn may_load(&self, store: &dyn KvStore, key: &str) -> Result<Option<T>, StoreError> {
        let full = self.full_key(key);
        store
            .get(&full)?
            .map(|data| decode(&full, self.discriminator, &data))
            .transpose()
    }

    pub fn load(&self, store: &dyn KvStore, key: &str) -> Result<T, StoreError> {
        self.may_load(store, key)?
            .ok_or_else(|| StoreError::NotFound {
                key: display_key(&self.full_key(key)),
            })
    }

    pub fn save(&self, store: &mut dyn KvStore, key: &str, value: &T) -> Result<(), StoreError> {
        let full = self.full_key(key);
        let data = encode(&full, self.discriminator, value)?;
        store.set(&full, data)
    }

    pub fn remove(&self, store: &mut dyn KvStore, key: &str) -> Result<(), StoreError> {
        store.delete(&self.full_key(key))
    }

    /// All entries in ascending key order, keys stripped of the prefix.
    pub fn entries(&self, store: &dyn KvStore) -> Result<Vec<(String, T)>, StoreError> {
        store
            .prefix_iter(self.prefix)?
            .into_iter()
            .map(|(full, data)| {
                let value = decode(&full, self.discriminator, &data)?;
                let key = display_key(full.get(self.prefix.len()..).unwrap_or_default());
                Ok((key, value))
            })
            .collect()
    }
}
