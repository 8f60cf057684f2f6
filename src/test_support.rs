// In-process stand-ins for the wallet, chain node and pinning service

use crate::core::config::{Config, PinningConfig};
use crate::core::state::AppState;
use crate::models::anchor::Address;
use crate::models::network::SEPOLIA_CHAIN_ID;
use crate::stores::storage::LocalStorage;
use crate::utils::hex::{decode_prefixed, encode_prefixed};
use crate::utils::time::current_timestamp;
use axum::{
    body::Body,
    extract::{Multipart, State},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderMap, Method, Request, StatusCode,
    },
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tower::ServiceExt;
use web3::ethabi::{self, ParamType, Token};
use web3::types::U256;

pub const MOCK_ACCOUNT: &str = "0x12f3a4b5c6d7e8f90a1b2c3d4e5f60718293a91a";
pub const MOCK_CONTRACT: &str = "0x4242424242424242424242424242424242424242";
pub const MOCK_CID: &str = "bafybeigdyrztmockcid";
pub const MOCK_JWT: &str = "token-123";
const START_BLOCK: u64 = 100;
const ZERO_WORD: &str = "0x0000000000000000000000000000000000000000000000000000000000000000";

#[derive(Clone, Debug)]
pub struct PinRecord {
    pub authorization: String,
    pub file_name: String,
    pub metadata: String,
}

struct Anchored {
    researcher: Address,
    timestamp: u64,
    cid: String,
    node_id: String,
}

struct MinedTx {
    block: u64,
    from: String,
    reverted: bool,
    /// Receipt lookups that answer `null` before the receipt appears
    pending_polls: u32,
}

struct MockState {
    accounts: Vec<String>,
    chain_id: u64,
    block: u64,
    anchors: HashMap<[u8; 32], Anchored>,
    receipts: HashMap<String, MinedTx>,
    pins: Vec<PinRecord>,
    revert: bool,
    fail_calls: bool,
    malformed_calls: bool,
    fail_estimate: bool,
    reject_sends: bool,
    reject_accounts: bool,
}

fn quantity(value: u64) -> String {
    format!("{:#x}", value)
}

fn word(value: u64) -> String {
    format!("0x{:064x}", value)
}

fn selector(name: &str) -> [u8; 4] {
    ethabi::short_signature(name, &[ParamType::FixedBytes(32)])
}

impl MockState {
    fn new() -> Self {
        Self {
            accounts: vec![MOCK_ACCOUNT.to_string()],
            chain_id: SEPOLIA_CHAIN_ID,
            block: START_BLOCK,
            anchors: HashMap::new(),
            receipts: HashMap::new(),
            pins: Vec::new(),
            revert: false,
            fail_calls: false,
            malformed_calls: false,
            fail_estimate: false,
            reject_sends: false,
            reject_accounts: false,
        }
    }

    fn dispatch(&mut self, method: &str, params: &Value) -> Result<Value, (i64, &'static str)> {
        match method {
            "eth_blockNumber" => Ok(json!(quantity(self.block))),
            "eth_chainId" => Ok(json!(quantity(self.chain_id))),
            "eth_requestAccounts" if self.reject_accounts => Err((4001, "User rejected the request.")),
            "eth_requestAccounts" | "eth_accounts" => Ok(json!(self.accounts)),
            "eth_estimateGas" if self.fail_estimate => Err((-32000, "gas required exceeds allowance")),
            "eth_estimateGas" => Ok(json!("0x186a0")),
            "eth_sendTransaction" if self.reject_sends => Err((4001, "User rejected the request.")),
            "eth_sendTransaction" => Ok(self.send_transaction(&params[0])),
            "eth_getTransactionReceipt" => Ok(self.receipt(params[0].as_str().unwrap_or_default())),
            "eth_getBlockByNumber" => Ok(self.latest_block()),
            "eth_newBlockFilter" => Ok(json!("0x1")),
            "eth_getFilterChanges" => {
                self.block += 1;
                Ok(json!([word(self.block)]))
            }
            "eth_uninstallFilter" => Ok(json!(true)),
            "eth_call" if self.fail_calls => Err((-32000, "execution reverted")),
            "eth_call" if self.malformed_calls => Ok(json!(Self::malformed_record())),
            "eth_call" => Ok(self.call(params[0]["data"].as_str().unwrap_or_default())),
            _ => Err((-32601, "Method not found")),
        }
    }

    fn send_transaction(&mut self, tx: &Value) -> Value {
        let data = decode_prefixed(tx["data"].as_str().unwrap_or_default()).unwrap();
        let from = tx["from"].as_str().unwrap_or_default().to_string();
        let submit = ethabi::short_signature(
            "submitData",
            &[ParamType::FixedBytes(32), ParamType::String, ParamType::String],
        );

        if !self.revert && data[..4] == submit {
            let args = ethabi::decode(
                &[ParamType::FixedBytes(32), ParamType::String, ParamType::String],
                &data[4..],
            )
            .unwrap();
            if let [Token::FixedBytes(hash), Token::String(cid), Token::String(node_id)] = args.as_slice() {
                let mut key = [0u8; 32];
                key.copy_from_slice(hash);
                self.anchors.insert(
                    key,
                    Anchored {
                        researcher: from.parse().unwrap(),
                        timestamp: current_timestamp() as u64,
                        cid: cid.clone(),
                        node_id: node_id.clone(),
                    },
                );
            }
        }

        self.block += 1;
        let tx_hash = word(self.receipts.len() as u64 + 1);
        self.receipts.insert(
            tx_hash.clone(),
            MinedTx {
                block: self.block,
                from,
                reverted: self.revert,
                pending_polls: 1,
            },
        );

        json!(tx_hash)
    }

    fn receipt(&mut self, tx_hash: &str) -> Value {
        match self.receipts.get_mut(tx_hash) {
            None => Value::Null,
            Some(tx) if tx.pending_polls > 0 => {
                tx.pending_polls -= 1;
                Value::Null
            }
            Some(tx) => json!({
                "transactionHash": tx_hash,
                "transactionIndex": "0x0",
                "blockHash": word(tx.block),
                "blockNumber": quantity(tx.block),
                "from": tx.from,
                "to": MOCK_CONTRACT,
                "cumulativeGasUsed": "0x186a0",
                "gasUsed": "0x186a0",
                "contractAddress": null,
                "logs": [],
                "status": if tx.reverted { "0x0" } else { "0x1" },
                "logsBloom": format!("0x{}", "0".repeat(512)),
                "type": "0x0",
                "effectiveGasPrice": "0x3b9aca00",
            }),
        }
    }

    fn latest_block(&self) -> Value {
        json!({
            "hash": word(self.block),
            "parentHash": word(self.block - 1),
            "sha3Uncles": ZERO_WORD,
            "miner": "0x0000000000000000000000000000000000000000",
            "stateRoot": ZERO_WORD,
            "transactionsRoot": ZERO_WORD,
            "receiptsRoot": ZERO_WORD,
            "number": quantity(self.block),
            "gasUsed": "0x0",
            "gasLimit": "0x1c9c380",
            "extraData": "0x",
            "logsBloom": format!("0x{}", "0".repeat(512)),
            "timestamp": quantity(current_timestamp() as u64 - 12),
            "difficulty": "0x0",
            "totalDifficulty": "0x0",
            "sealFields": [],
            "uncles": [],
            "transactions": [],
            "size": "0x220",
            "mixHash": ZERO_WORD,
            "nonce": "0x0000000000000000",
        })
    }

    fn call(&self, data: &str) -> Value {
        let data = decode_prefixed(data).unwrap();
        let mut hash = [0u8; 32];
        hash.copy_from_slice(&data[4..36]);
        let anchored = self.anchors.get(&hash);

        let (researcher, timestamp, cid, node_id) = match anchored {
            Some(a) => (a.researcher, a.timestamp, a.cid.clone(), a.node_id.clone()),
            None => (Address::default(), 0, String::new(), String::new()),
        };
        let mut tokens = vec![
            Token::Address(researcher.into()),
            Token::Uint(U256::from(timestamp)),
            Token::String(cid),
            Token::String(node_id),
        ];
        if data[..4] == selector("verifyHash") {
            tokens.insert(0, Token::Bool(anchored.is_some()));
        }

        json!(encode_prefixed(&ethabi::encode(&tokens)))
    }

    /// A `verifyHash`-shaped result whose first string offset points far past the data
    fn malformed_record() -> String {
        let mut words = vec![[0u8; 32]; 5];
        words[0][31] = 1;
        words[3] = [0xff; 32];
        words[4][31] = 0xa0;
        encode_prefixed(&words.concat())
    }
}

/// Mock JSON-RPC node (also answering wallet methods) plus a pinning endpoint
pub struct MockChain {
    addr: SocketAddr,
    state: Arc<Mutex<MockState>>,
}

impl MockChain {
    pub async fn start() -> Self {
        let state = Arc::new(Mutex::new(MockState::new()));
        let app = Router::new()
            .route("/rpc", post(rpc_handler))
            .route("/pin", post(pin_handler))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn url(&self) -> String {
        format!("http://{}/rpc", self.addr)
    }

    pub fn pinning_config(&self, jwt: &str) -> PinningConfig {
        PinningConfig {
            endpoint: Some(format!("http://{}/pin", self.addr)),
            jwt: Some(jwt.to_string()),
        }
    }

    pub fn pins(&self) -> Vec<PinRecord> {
        self.state.lock().unwrap().pins.clone()
    }

    pub fn set_accounts(&self, accounts: Vec<String>) {
        self.state.lock().unwrap().accounts = accounts;
    }

    pub fn set_chain_id(&self, chain_id: u64) {
        self.state.lock().unwrap().chain_id = chain_id;
    }

    pub fn revert_transactions(&self, revert: bool) {
        self.state.lock().unwrap().revert = revert;
    }

    pub fn fail_calls(&self, fail: bool) {
        self.state.lock().unwrap().fail_calls = fail;
    }

    pub fn malformed_calls(&self, malformed: bool) {
        self.state.lock().unwrap().malformed_calls = malformed;
    }

    pub fn reject_accounts(&self, reject: bool) {
        self.state.lock().unwrap().reject_accounts = reject;
    }

    pub fn fail_estimate(&self, fail: bool) {
        self.state.lock().unwrap().fail_estimate = fail;
    }

    pub fn reject_sends(&self, reject: bool) {
        self.state.lock().unwrap().reject_sends = reject;
    }

    pub fn sent_transactions(&self) -> usize {
        self.state.lock().unwrap().receipts.len()
    }

    /// Config pointing every outbound client at this mock
    pub fn config(&self, with_wallet: bool) -> Config {
        let wallet = if with_wallet {
            format!("provider_url = \"{}\"", self.url())
        } else {
            String::new()
        };
        let pinning = self.pinning_config(MOCK_JWT);

        Config::from_toml(&format!(
            r#"
            [server]
            port = 8080

            [wallet]
            {wallet}
            poll_interval = 1

            [chain]
            rpc_url = "{rpc}"
            contract_address = "{MOCK_CONTRACT}"
            receipt_poll_interval = 10
            request_timeout = 5

            [pinning]
            endpoint = "{endpoint}"
            jwt = "{MOCK_JWT}"

            [links]
            github_url = "https://github.com/example/science-ledger"
            docs_url = "https://docs.example.org/science-ledger"

            [logging]
            "#,
            rpc = self.url(),
            endpoint = pinning.endpoint.unwrap(),
        ))
        .unwrap()
    }

    /// App state over in-memory storage and this mock
    pub fn app_state(&self, with_wallet: bool) -> AppState {
        AppState::new(self.config(with_wallet), LocalStorage::in_memory()).unwrap()
    }
}

async fn rpc_handler(State(state): State<Arc<Mutex<MockState>>>, Json(request): Json<Value>) -> Json<Value> {
    let method = request["method"].as_str().unwrap_or_default();
    let result = state.lock().unwrap().dispatch(method, &request["params"]);

    Json(match result {
        Ok(result) => json!({"jsonrpc": "2.0", "id": request["id"], "result": result}),
        Err((code, message)) => json!({
            "jsonrpc": "2.0",
            "id": request["id"],
            "error": {"code": code, "message": message},
        }),
    })
}

async fn pin_handler(
    State(state): State<Arc<Mutex<MockState>>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let mut file_name = String::new();
    let mut metadata = String::new();

    while let Some(field) = multipart.next_field().await.unwrap() {
        match field.name().map(str::to_string).as_deref() {
            Some("file") => {
                file_name = field.file_name().unwrap_or_default().to_string();
                field.bytes().await.unwrap();
            }
            Some("pinataMetadata") => metadata = field.text().await.unwrap(),
            _ => {}
        }
    }

    if authorization != format!("Bearer {}", MOCK_JWT) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "Invalid token"}))).into_response();
    }

    state.lock().unwrap().pins.push(PinRecord {
        authorization,
        file_name,
        metadata,
    });

    Json(json!({"IpfsHash": MOCK_CID, "PinSize": 8})).into_response()
}

/// Run one request through the full router
pub async fn send(state: &Arc<AppState>, method: Method, uri: &str, body: Option<Value>) -> Response {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    crate::core::routes::build_router(Arc::clone(state))
        .oneshot(request)
        .await
        .unwrap()
}

/// POST a multipart form with text `fields` and an optional `file` part
pub async fn send_multipart(
    state: &Arc<AppState>,
    uri: &str,
    fields: &[(&str, &str)],
    file: Option<(&str, &str)>,
) -> Response {
    const BOUNDARY: &str = "science-ledger-test-boundary";
    let mut body = String::new();

    for (name, value) in fields {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    if let Some((file_name, content)) = file {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n{content}\r\n"
        ));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Body::from(body))
        .unwrap();

    crate::core::routes::build_router(Arc::clone(state))
        .oneshot(request)
        .await
        .unwrap()
}

pub async fn read_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
