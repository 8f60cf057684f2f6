use crate::core::error::StorageError;
use crate::models::session::SessionRecord;
use crate::stores::storage::{LocalStorage, Scope, SESSION_KEY};

/// What was found under `dsl_session`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredSession {
    Missing,
    /// Present but not a valid session record
    Unreadable,
    Active(SessionRecord),
}

#[derive(Clone)]
pub struct SessionStore {
    storage: LocalStorage,
}

impl SessionStore {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    /// Remembered sessions go to the persistent scope, others to the session scope
    pub fn save(&self, record: &SessionRecord, remember: bool) -> Result<(), StorageError> {
        let scope = if remember { Scope::Persistent } else { Scope::Session };
        self.storage
            .scope(scope)
            .set_item(SESSION_KEY, &serde_json::to_string(record)?)
    }

    /// Persistent scope wins over the session scope
    pub fn load(&self) -> Result<StoredSession, StorageError> {
        let raw = match self.storage.scope(Scope::Persistent).get_item(SESSION_KEY)? {
            Some(raw) => Some(raw),
            None => self.storage.scope(Scope::Session).get_item(SESSION_KEY)?,
        };

        Ok(match raw {
            None => StoredSession::Missing,
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(record) => StoredSession::Active(record),
                Err(_) => StoredSession::Unreadable,
            },
        })
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.scope(Scope::Persistent).remove_item(SESSION_KEY)?;
        self.storage.scope(Scope::Session).remove_item(SESSION_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(email: &str) -> SessionRecord {
        SessionRecord::new(email.to_string(), None, 42)
    }

    #[test]
    fn test_remember_selects_scope() {
        let storage = LocalStorage::in_memory();
        let sessions = SessionStore::new(storage.clone());

        sessions.save(&record("a@x"), true).unwrap();
        assert!(storage.persistent.get_item(SESSION_KEY).unwrap().is_some());
        assert!(storage.session.get_item(SESSION_KEY).unwrap().is_none());

        sessions.clear().unwrap();
        sessions.save(&record("b@x"), false).unwrap();
        assert!(storage.persistent.get_item(SESSION_KEY).unwrap().is_none());
        assert!(storage.session.get_item(SESSION_KEY).unwrap().is_some());
    }

    #[test]
    fn test_persistent_scope_wins() {
        let sessions = SessionStore::new(LocalStorage::in_memory());
        sessions.save(&record("session@x"), false).unwrap();
        sessions.save(&record("remembered@x"), true).unwrap();

        assert_eq!(sessions.load().unwrap(), StoredSession::Active(record("remembered@x")));
    }

    #[test]
    fn test_clear_removes_both() {
        let sessions = SessionStore::new(LocalStorage::in_memory());
        sessions.save(&record("a@x"), false).unwrap();
        sessions.save(&record("a@x"), true).unwrap();

        sessions.clear().unwrap();
        assert_eq!(sessions.load().unwrap(), StoredSession::Missing);
    }

    #[test]
    fn test_unreadable_session() {
        let storage = LocalStorage::in_memory();
        storage.session.set_item(SESSION_KEY, "nope").unwrap();

        assert_eq!(SessionStore::new(storage).load().unwrap(), StoredSession::Unreadable);
    }

    #[test]
    fn test_record_json_shape() {
        let json = serde_json::to_value(SessionRecord::new("a@x".to_string(), None, 7)).unwrap();
        assert_eq!(json, serde_json::json!({"email": "a@x", "wallet": null, "createdAt": 7}));
    }
}
