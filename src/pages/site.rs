use crate::core::state::AppState;
use crate::models::views::{DemoModeView, SiteLinks, TickerItem};

const TICKER_MESSAGES: [&str; 4] = [
    "eDNA hash 0x91ab… anchored by Node‑A07",
    "Telemetry stream 0x73ff… pinned to IPFS",
    "Climate dataset 0xd201… verified on‑chain",
    "Orbital node 0x44c9… submitted batch anchors",
];

pub fn links(state: &AppState) -> SiteLinks {
    SiteLinks {
        github_url: state.config.links.github_url.clone(),
        docs_url: state.config.links.docs_url.clone(),
        contract_address: state.config.chain.contract_address.clone(),
        provider_configured: state.provider.is_some(),
    }
}

/// Sample messages, twice over so the marquee can loop; first word emphasised
pub fn ticker() -> Vec<TickerItem> {
    TICKER_MESSAGES
        .iter()
        .chain(TICKER_MESSAGES.iter())
        .map(|&message| {
            let (lead, rest) = message.split_once(' ').unwrap_or((message, ""));
            TickerItem {
                lead: lead.to_string(),
                rest: rest.to_string(),
            }
        })
        .collect()
}

fn demo_mode_view(demo_mode: bool) -> DemoModeView {
    DemoModeView {
        demo_mode,
        label: if demo_mode { "Demo Mode: ON" } else { "Demo Mode" }.to_string(),
    }
}

pub async fn demo_mode(state: &AppState) -> DemoModeView {
    demo_mode_view(state.session.lock().await.demo_mode)
}

pub async fn toggle_demo_mode(state: &AppState) -> DemoModeView {
    let mut session = state.session.lock().await;
    session.demo_mode = !session.demo_mode;
    demo_mode_view(session.demo_mode)
}
