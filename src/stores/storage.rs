use crate::core::error::StorageError;
use dashmap::DashMap;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Key for the cached wallet address (session scope)
pub const WALLET_KEY: &str = "dsl_wallet";
/// Key for the local user mapping (persistent scope)
pub const USERS_KEY: &str = "dsl_users";
/// Key for the signed-in session record (either scope)
pub const SESSION_KEY: &str = "dsl_session";

/// String key/value area, one per storage scope
pub trait StorageArea: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Session-lived scope; gone when the process exits
#[derive(Default)]
pub struct MemoryStorage {
    items: DashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl StorageArea for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).map(|entry| entry.value().clone()))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}

/// Persistent scope backed by one JSON object on disk
///
/// The whole object is rewritten on every change, through a temporary file
/// renamed over the existing one so a crash never leaves a half-written file.
pub struct FileStorage {
    items: Mutex<BTreeMap<String, String>>,
    path: PathBuf,
}

impl FileStorage {
    pub fn open(path: PathBuf) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let items = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => match serde_json::from_str(&content) {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Persistent storage is not valid JSON, starting empty"
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            items: Mutex::new(items),
            path,
        })
    }

    fn flush(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let tmp_path = self.path.with_extension("json.tmp");

        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(serde_json::to_string_pretty(items)?.as_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl StorageArea for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|_| StorageError::Poisoned)?;
        items.insert(key.to_string(), value.to_string());
        self.flush(&items)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|_| StorageError::Poisoned)?;
        if items.remove(key).is_some() {
            self.flush(&items)?;
        }
        Ok(())
    }
}

/// Which scope a value is written to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    Persistent,
    Session,
}

/// Both storage scopes
#[derive(Clone)]
pub struct LocalStorage {
    pub persistent: Arc<dyn StorageArea>,
    pub session: Arc<dyn StorageArea>,
}

impl LocalStorage {
    pub fn new(persistent: Arc<dyn StorageArea>, session: Arc<dyn StorageArea>) -> Self {
        Self {
            persistent,
            session,
        }
    }

    /// Persistent scope in `data_dir/local_storage.json`, session scope in memory
    pub fn open(data_dir: &Path) -> Result<Self, StorageError> {
        let persistent = FileStorage::open(data_dir.join("local_storage.json"))?;
        Ok(Self::new(Arc::new(persistent), Arc::new(MemoryStorage::new())))
    }

    /// Both scopes in memory
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()), Arc::new(MemoryStorage::new()))
    }

    pub fn scope(&self, scope: Scope) -> &dyn StorageArea {
        match scope {
            Scope::Persistent => self.persistent.as_ref(),
            Scope::Session => self.session.as_ref(),
        }
    }
}
