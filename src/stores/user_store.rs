use crate::core::error::StorageError;
use crate::models::user::{UserMap, UserRecord};
use crate::stores::storage::{LocalStorage, Scope, USERS_KEY};

/// Local user mapping kept under `dsl_users` in the persistent scope
#[derive(Clone)]
pub struct UserStore {
    storage: LocalStorage,
}

/// Why a credential check failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFailure {
    UnknownEmail,
    WrongPassword,
}

impl UserStore {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    /// Current mapping; a missing or unparseable value reads as empty
    pub fn load(&self) -> Result<UserMap, StorageError> {
        let raw = self
            .storage
            .scope(Scope::Persistent)
            .get_item(USERS_KEY)?
            .unwrap_or_else(|| "{}".to_string());

        Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "User mapping is corrupt, treating as empty");
            UserMap::new()
        }))
    }

    /// Add an account. Returns `false` when the email is already taken.
    pub fn register(&self, email: &str, password: &str, now_millis: i64) -> Result<bool, StorageError> {
        let mut users = self.load()?;

        if users.contains_key(email) {
            return Ok(false);
        }

        users.insert(email.to_string(), UserRecord::new(password.to_string(), now_millis));
        self.storage
            .scope(Scope::Persistent)
            .set_item(USERS_KEY, &serde_json::to_string(&users)?)?;

        Ok(true)
    }

    pub fn check_credentials(&self, email: &str, password: &str) -> Result<Result<(), LoginFailure>, StorageError> {
        let users = self.load()?;

        Ok(match users.get(email) {
            None => Err(LoginFailure::UnknownEmail),
            Some(user) if user.password != password => Err(LoginFailure::WrongPassword),
            Some(_) => Ok(()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_then_login() {
        let store = UserStore::new(LocalStorage::in_memory());

        assert!(store.register("ana@lab.org", "secret1", 1000).unwrap());
        assert_eq!(store.check_credentials("ana@lab.org", "secret1").unwrap(), Ok(()));
        assert_eq!(
            store.check_credentials("ana@lab.org", "secret2").unwrap(),
            Err(LoginFailure::WrongPassword)
        );
        assert_eq!(
            store.check_credentials("bo@lab.org", "secret1").unwrap(),
            Err(LoginFailure::UnknownEmail)
        );
    }

    #[test]
    fn test_password_compare_is_exact() {
        let store = UserStore::new(LocalStorage::in_memory());
        store.register("ana@lab.org", "secret1", 1000).unwrap();

        for attempt in ["Secret1", "secret1 ", "secret", ""] {
            assert_eq!(
                store.check_credentials("ana@lab.org", attempt).unwrap(),
                Err(LoginFailure::WrongPassword),
                "{attempt:?} accepted"
            );
        }
    }

    #[test]
    fn test_register_twice_rejected() {
        let store = UserStore::new(LocalStorage::in_memory());

        assert!(store.register("ana@lab.org", "secret1", 1000).unwrap());
        assert!(!store.register("ana@lab.org", "other-pass", 2000).unwrap());

        // First registration is kept
        let users = store.load().unwrap();
        assert_eq!(users["ana@lab.org"], UserRecord::new("secret1".to_string(), 1000));
    }

    #[test]
    fn test_stored_shape() {
        let storage = LocalStorage::in_memory();
        let store = UserStore::new(storage.clone());
        store.register("ana@lab.org", "secret1", 1234).unwrap();

        let raw = storage.persistent.get_item(USERS_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["ana@lab.org"]["password"], "secret1");
        assert_eq!(value["ana@lab.org"]["createdAt"], 1234);
    }

    #[test]
    fn test_corrupt_mapping_reads_empty() {
        let storage = LocalStorage::in_memory();
        storage.persistent.set_item(USERS_KEY, "{broken").unwrap();

        let store = UserStore::new(storage);
        assert!(store.load().unwrap().is_empty());
        assert!(store.register("ana@lab.org", "secret1", 1).unwrap());
    }
}
