use crate::core::error::StorageError;
use crate::stores::storage::{LocalStorage, Scope, WALLET_KEY};

/// Connected wallet address cached under `dsl_wallet` in the session scope
#[derive(Clone)]
pub struct WalletCache {
    storage: LocalStorage,
}

impl WalletCache {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    pub fn get(&self) -> Result<Option<String>, StorageError> {
        Ok(self
            .storage
            .scope(Scope::Session)
            .get_item(WALLET_KEY)?
            .filter(|wallet| !wallet.is_empty()))
    }

    pub fn set(&self, wallet: &str) -> Result<(), StorageError> {
        self.storage.scope(Scope::Session).set_item(WALLET_KEY, wallet)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.scope(Scope::Session).remove_item(WALLET_KEY)
    }
}
