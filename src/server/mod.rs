//! JSON-over-HTTP API server.
//!
//! Two endpoints, both `POST` with JSON bodies:
//!
//! - `/get` `{"key"}` → `{"key", "value"}`
//! - `/put` `{"key", "value"}` → `{"err"}`
//!
//! Every request that decodes is answered with `200 OK`; validation and
//! storage failures travel in the response body.

mod config;
mod error;
mod logging;
mod operation;
mod routes;
mod state;

pub use config::{Config, ConfigError, LogFormat, LoggingConfig, ServerConfig, StorageConfig};
pub use error::{ApiError, ErrorBody, ErrorResponse};
pub use logging::{LoggingError, init as init_logging};
pub use operation::{Operation, handle};
pub use routes::{
    GetOperation, GetRequest, GetResponse, PutOperation, PutRequest, PutResponse, router,
};
pub use state::AppState;
