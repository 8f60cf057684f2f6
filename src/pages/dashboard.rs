use crate::chain::blocks::latest_block;
use crate::core::error::StorageError;
use crate::core::state::AppState;
use crate::models::views::{ActivityItem, BlockStats, DashboardView, NodeRow};
use crate::pages::auth::LOGIN_PATH;
use crate::stores::session_store::StoredSession;
use crate::utils::time::{current_timestamp_secs_f64, elapsed_since};
use tracing::{info, warn};

pub const MOCK_SENSOR_EVENT: &str =
    "Mock sensor stream injected: 12 orbital packets + 3 eDNA snapshots.";

pub enum DashboardPage {
    /// No session record; send the visitor to this path
    Redirect(&'static str),
    Render(DashboardView),
}

pub fn demo_nodes() -> Vec<NodeRow> {
    let row = |id: &str, wallet: &str, submissions, last: &str, status: &str, rep| NodeRow {
        id: id.to_string(),
        wallet: wallet.to_string(),
        submissions,
        last: last.to_string(),
        status: status.to_string(),
        rep,
    };

    vec![
        row("Node‑A07", "0x12F3...91Ab", 42, "2 min ago", "Verified", 88.2),
        row("Node‑E12", "0x9a7B...22Cd", 19, "14 min ago", "Pending", 74.5),
        row("Node‑O33", "0x44c9...F09a", 61, "48 min ago", "Verified", 93.1),
    ]
}

/// Latest block number and its age; `None` when the node cannot be reached
pub async fn block_stats(state: &AppState) -> Option<BlockStats> {
    match latest_block(&state.chain).await {
        Ok(head) => Some(BlockStats {
            block_number: head.number,
            seconds_since: (head.timestamp > 0)
                .then(|| elapsed_since(head.timestamp, current_timestamp_secs_f64())),
        }),
        Err(e) => {
            warn!(error = %e, "Failed to fetch block stats");
            None
        }
    }
}

pub async fn load(state: &AppState) -> Result<DashboardPage, StorageError> {
    let session_email = match state.sessions.load()? {
        StoredSession::Missing => return Ok(DashboardPage::Redirect(LOGIN_PATH)),
        StoredSession::Unreadable => None,
        StoredSession::Active(record) => Some(record.email).filter(|email| !email.is_empty()),
    };

    let block_stats = block_stats(state).await;
    let wallet = state.session.lock().await.wallet.clone();

    Ok(DashboardPage::Render(DashboardView {
        session_email,
        nodes: demo_nodes(),
        activity: state.activity.list(),
        block_stats,
        wallet,
    }))
}

/// Drop the session from both scopes; returns where to go next
pub fn logout(state: &AppState) -> Result<&'static str, StorageError> {
    state.sessions.clear()?;
    info!("Session closed");
    Ok(LOGIN_PATH)
}

pub fn mock_sensor(state: &AppState) -> ActivityItem {
    state.activity.push(MOCK_SENSOR_EVENT, None)
}
