use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Local demo account, keyed by email in the user mapping
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Plaintext; accounts never leave the local machine
    pub password: String,
    /// Milliseconds since the Unix epoch
    pub created_at: i64,
}

impl UserRecord {
    pub fn new(password: String, created_at: i64) -> Self {
        Self {
            password,
            created_at,
        }
    }
}

/// Email → account, the JSON value stored under `dsl_users`
pub type UserMap = BTreeMap<String, UserRecord>;
