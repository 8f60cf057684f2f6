use serde::{Deserialize, Serialize};

/// Signed-in session, the JSON value stored under `dsl_session`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub email: String,
    pub wallet: Option<String>,
    /// Milliseconds since the Unix epoch
    pub created_at: i64,
}

impl SessionRecord {
    pub fn new(email: String, wallet: Option<String>, created_at: i64) -> Self {
        Self {
            email,
            wallet,
            created_at,
        }
    }
}
