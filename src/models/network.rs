use serde::Serialize;

pub const SEPOLIA_CHAIN_ID: u64 = 11_155_111;

/// Network identity reported by the wallet provider
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NetworkInfo {
    pub chain_id: u64,
    pub name: Option<String>,
}

impl NetworkInfo {
    pub fn from_chain_id(chain_id: u64) -> Self {
        Self {
            chain_id,
            name: known_network_name(chain_id).map(str::to_string),
        }
    }

    pub fn is_sepolia(&self) -> bool {
        self.chain_id == SEPOLIA_CHAIN_ID
    }

    /// Label shown in the wallet dropdown
    pub fn label(&self) -> String {
        if self.is_sepolia() {
            return "Sepolia".to_string();
        }
        match &self.name {
            Some(name) => name.clone(),
            None => format!("Chain {}", self.chain_id),
        }
    }
}

fn known_network_name(chain_id: u64) -> Option<&'static str> {
    match chain_id {
        1 => Some("homestead"),
        5 => Some("goerli"),
        10 => Some("optimism"),
        137 => Some("matic"),
        17_000 => Some("holesky"),
        42_161 => Some("arbitrum"),
        SEPOLIA_CHAIN_ID => Some("sepolia"),
        _ => None,
    }
}
