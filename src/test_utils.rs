//! Shared test utilities and Mother pattern factories.
//!
//! Stubs for the backend and the sleeper, a log capture layer, and a tiny
//! HTTP server for exercising the Blockfrost client against canned
//! responses.
#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::fmt::Write as _;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::client::ChainBackend;
use crate::domain::{
    AddressContent, Amount, AssetContent, LookupOutcome, PolicyAsset, PolicyContent,
    TransactionContent,
};
use crate::service::confirmation::Sleeper;

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct TransactionMother;

impl TransactionMother {
    #[must_use]
    pub fn confirmed(hash: &str) -> TransactionContent {
        TransactionContent {
            hash: hash.to_string(),
            block: "356b7d7dbb696ccd12775c016941057a9dc70898d87a63fc752271bb46856940".to_string(),
            block_height: 123_456,
            block_time: 1_635_505_891,
            slot: 42_000_000,
            index: 1,
            output_amount: vec![Amount {
                unit: "lovelace".to_string(),
                quantity: "42000000".to_string(),
            }],
            fees: "182485".to_string(),
            size: 433,
            valid_contract: true,
        }
    }
}

pub struct EntityMother;

impl EntityMother {
    #[must_use]
    pub fn address(address: &str) -> AddressContent {
        AddressContent {
            address: address.to_string(),
            amount: vec![Amount {
                unit: "lovelace".to_string(),
                quantity: "1000000".to_string(),
            }],
            stake_address: None,
            era: "shelley".to_string(),
            script: false,
        }
    }

    #[must_use]
    pub fn policy(policy_id: &str) -> PolicyContent {
        PolicyContent {
            policy_id: policy_id.to_string(),
            assets: vec![PolicyAsset {
                asset: format!("{policy_id}546f6b656e"),
                quantity: "1".to_string(),
            }],
        }
    }

    #[must_use]
    pub fn asset(asset_id: &str) -> AssetContent {
        AssetContent {
            asset: asset_id.to_string(),
            policy_id: asset_id.chars().take(56).collect(),
            asset_name: Some(asset_id.chars().skip(56).collect()),
            fingerprint: "asset1rjklcrnsdzqp65wjgrg55sy9723kw09mlgvlc3".to_string(),
            quantity: "1".to_string(),
            initial_mint_tx_hash: "aa11".to_string(),
            mint_or_burn_count: 1,
        }
    }
}

pub struct JsonMother;

impl JsonMother {
    /// Blockfrost `/txs/{hash}` body.
    #[must_use]
    pub fn transaction(hash: &str) -> serde_json::Value {
        serde_json::json!({
            "hash": hash,
            "block": "356b7d7dbb696ccd12775c016941057a9dc70898d87a63fc752271bb46856940",
            "block_height": 123456,
            "block_time": 1635505891,
            "slot": 42000000,
            "index": 1,
            "output_amount": [{"unit": "lovelace", "quantity": "42000000"}],
            "fees": "182485",
            "deposit": "0",
            "size": 433,
            "invalid_before": null,
            "invalid_hereafter": "13885913",
            "utxo_count": 4,
            "withdrawal_count": 0,
            "valid_contract": true
        })
    }
}

// ============================================================================
// Stub Backend
// ============================================================================

/// What every lookup of a [`StubBackend`] answers.
#[derive(Debug, Clone)]
enum StubAnswer {
    Found,
    NotFound,
    TransportError(String),
}

impl StubAnswer {
    fn outcome<T>(&self, content: impl FnOnce() -> T) -> LookupOutcome<T> {
        match self {
            Self::Found => LookupOutcome::Found(content()),
            Self::NotFound => LookupOutcome::NotFound,
            Self::TransportError(detail) => LookupOutcome::TransportError(detail.clone()),
        }
    }
}

/// Call-counting backend with canned answers.
///
/// Capabilities are counted as `transaction`, `address`, `policy`, `asset`
/// and `status`. Status polls first drain the script, then fall back to the
/// default answer.
pub struct StubBackend {
    answer: StubAnswer,
    status_script: Mutex<VecDeque<LookupOutcome<TransactionContent>>>,
    calls: Mutex<HashMap<&'static str, usize>>,
    last_value: Mutex<Option<String>>,
}

impl StubBackend {
    fn with_answer(answer: StubAnswer) -> Self {
        Self {
            answer,
            status_script: Mutex::new(VecDeque::new()),
            calls: Mutex::new(HashMap::new()),
            last_value: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn all_found() -> Self {
        Self::with_answer(StubAnswer::Found)
    }

    #[must_use]
    pub fn all_not_found() -> Self {
        Self::with_answer(StubAnswer::NotFound)
    }

    #[must_use]
    pub fn all_transport_error(detail: &str) -> Self {
        Self::with_answer(StubAnswer::TransportError(detail.to_string()))
    }

    #[must_use]
    pub fn with_status_script(self, script: Vec<LookupOutcome<TransactionContent>>) -> Self {
        *self.status_script.lock().unwrap() = script.into();
        self
    }

    pub fn calls(&self, capability: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(capability)
            .copied()
            .unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    pub fn last_value(&self) -> Option<String> {
        self.last_value.lock().unwrap().clone()
    }

    fn record(&self, capability: &'static str, value: &str) {
        *self.calls.lock().unwrap().entry(capability).or_default() += 1;
        *self.last_value.lock().unwrap() = Some(value.to_string());
    }
}

#[async_trait]
impl ChainBackend for StubBackend {
    async fn lookup_transaction(&self, id: &str) -> LookupOutcome<TransactionContent> {
        self.record("transaction", id);
        self.answer.outcome(|| TransactionMother::confirmed(id))
    }

    async fn lookup_address(&self, address: &str) -> LookupOutcome<AddressContent> {
        self.record("address", address);
        self.answer.outcome(|| EntityMother::address(address))
    }

    async fn lookup_policy(&self, policy_id: &str) -> LookupOutcome<PolicyContent> {
        self.record("policy", policy_id);
        self.answer.outcome(|| EntityMother::policy(policy_id))
    }

    async fn lookup_asset(&self, asset_id: &str) -> LookupOutcome<AssetContent> {
        self.record("asset", asset_id);
        self.answer.outcome(|| EntityMother::asset(asset_id))
    }

    async fn get_transaction_status(&self, id: &str) -> LookupOutcome<TransactionContent> {
        self.record("status", id);
        let scripted = self.status_script.lock().unwrap().pop_front();
        scripted.unwrap_or_else(|| self.answer.outcome(|| TransactionMother::confirmed(id)))
    }
}

// ============================================================================
// Sleepers
// ============================================================================

/// Records requested sleeps without waiting.
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    slept: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn sleeps(&self) -> usize {
        self.slept.lock().unwrap().len()
    }

    /// Simulated time spent sleeping.
    pub fn elapsed(&self) -> Duration {
        self.slept.lock().unwrap().iter().sum()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.slept.lock().unwrap().push(duration);
        tokio::task::yield_now().await;
    }
}

/// Never wakes up; only cancellation ends a wait using it.
#[derive(Debug, Default)]
pub struct StalledSleeper;

#[async_trait]
impl Sleeper for StalledSleeper {
    async fn sleep(&self, _duration: Duration) {
        std::future::pending::<()>().await;
    }
}

// ============================================================================
// Log Capture
// ============================================================================

/// `tracing` layer that keeps every event as `(level, rendered fields)`.
#[derive(Clone, Default)]
pub struct LogCapture {
    events: Arc<Mutex<Vec<(Level, String)>>>,
}

impl LogCapture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the capture as the thread's default subscriber until the
    /// guard is dropped.
    pub fn set_default(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::set_default(subscriber)
    }

    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn count_at(&self, level: Level) -> usize {
        self.messages_at(level).len()
    }
}

impl<S: Subscriber> Layer<S> for LogCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldRenderer::default();
        event.record(&mut visitor);
        self.events
            .lock()
            .unwrap()
            .push((*event.metadata().level(), visitor.0));
    }
}

#[derive(Default)]
struct FieldRenderer(String);

impl Visit for FieldRenderer {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if !self.0.is_empty() {
            self.0.push(' ');
        }
        if field.name() == "message" {
            let _ = write!(self.0, "{value:?}");
        } else {
            let _ = write!(self.0, "{}={value:?}", field.name());
        }
    }
}

// ============================================================================
// Mock HTTP Server
// ============================================================================

/// Answers every request with the same status and body, remembering the
/// request heads it received.
pub struct MockServer {
    addr: std::net::SocketAddr,
    requests: Arc<tokio::sync::Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl MockServer {
    pub async fn start(status: u16, body: impl Into<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("mock server should bind");
        let addr = listener.local_addr().expect("bound listener has an address");
        let body = body.into();
        let reason = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown");
        let response = format!(
            "HTTP/1.1 {status} {reason}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );

        let requests = Arc::new(tokio::sync::Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);
        let handle = tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let head = read_request_head(&mut socket).await;
                seen.lock().await.push(head);
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Self {
            addr,
            requests,
            handle,
        }
    }

    /// Base URL shaped like the hosted API (`.../api/v0`).
    pub fn base_url(&self) -> String {
        format!("http://{}/api/v0", self.addr)
    }

    pub async fn last_request(&self) -> Option<String> {
        self.requests.lock().await.last().cloned()
    }

    /// A base URL nothing listens on.
    pub async fn unreachable_base_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("mock server should bind");
        let addr = listener.local_addr().expect("bound listener has an address");
        drop(listener);
        format!("http://{addr}/api/v0")
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn read_request_head(socket: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => {
                head.extend_from_slice(&chunk[..n]);
                if head.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
        }
    }
    String::from_utf8_lossy(&head).into_owned()
}
