//! Common test utilities and fixtures.

#![cfg(feature = "server")]
#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::json;
use tempfile::TempDir;

use gnolly::server::{AppState, GetResponse, PutResponse, router};
use gnolly::{DEFAULT_PARTITION, Record, RecordStore, Service, Store, StoreError};

// =============================================================================
// Test Application
// =============================================================================

/// Test application wrapper that manages a temporary database.
pub struct TestApp {
    pub server: TestServer,
    _temp_dir: TempDir, // Keep alive for test duration
}

impl TestApp {
    /// Create a new test application with a fresh temporary database.
    pub fn new() -> anyhow::Result<Self> {
        let temp_dir = TempDir::new()?;
        let store = Store::open(temp_dir.path().join("db"), DEFAULT_PARTITION)?;
        let server = TestServer::new(router(AppState::new(Service::new(store))))?;
        Ok(Self {
            server,
            _temp_dir: temp_dir,
        })
    }

    /// `POST /put` and decode the response.
    pub async fn put(&self, key: &str, value: &str) -> PutResponse {
        let response = self
            .server
            .post("/put")
            .json(&json!({ "key": key, "value": value }))
            .await;
        response.assert_status_ok();
        response.json()
    }

    /// `POST /get` and decode the response.
    pub async fn get(&self, key: &str) -> GetResponse {
        let response = self.server.post("/get").json(&json!({ "key": key })).await;
        response.assert_status_ok();
        response.json()
    }
}

/// Build a test server over an arbitrary store.
pub fn server_with<S: RecordStore + 'static>(store: S) -> anyhow::Result<TestServer> {
    Ok(TestServer::new(router(AppState::new(Service::new(store))))?)
}

// =============================================================================
// Test Doubles
// =============================================================================

/// A store whose engine fails every call.
pub struct BrokenStore;

impl BrokenStore {
    pub const KEY: &'static str = "broken";

    fn error() -> StoreError {
        let source = match String::from_utf8(vec![0xc3, 0x28]) {
            Ok(_) => unreachable!("invalid UTF-8 decoded"),
            Err(e) => e,
        };
        StoreError::InvalidValue {
            key: Self::KEY.to_string(),
            source,
        }
    }
}

impl RecordStore for BrokenStore {
    fn put(&self, _record: &Record) -> Result<(), StoreError> {
        Err(Self::error())
    }

    fn get(&self, _key: &str) -> Result<Option<Record>, StoreError> {
        Err(Self::error())
    }
}
