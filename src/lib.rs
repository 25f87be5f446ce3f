//! A durable key-value record store.
//!
//! Clients write a non-empty key/value pair and read back the most recently
//! stored value for a key. Records live in a single named partition of a
//! [fjall](https://docs.rs/fjall) database.
//!
//! # Quick Start
//!
//! ```no_run
//! use gnolly::prelude::*;
//!
//! let store = Store::open("gnolly.db", DEFAULT_PARTITION)?;
//! let service = Service::new(store);
//!
//! assert!(service.put("a", "1").is_stored());
//! assert_eq!(service.get("a").value(), "1");
//! assert_eq!(service.get("b").value(), "");
//! # Ok::<(), gnolly::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`record`] - The validated key/value unit
//! - [`store`] - fjall-backed storage and the [`RecordStore`] trait
//! - [`service`] - Validation and in-band error reporting
//! - [`server`] - JSON-over-HTTP API (requires `server` feature)
//!
//! # Feature Flags
//!
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)
//! - `server` - Enable the HTTP API server (enabled by default)

mod error;
mod logging;
pub mod prelude;
pub mod record;
#[cfg(feature = "server")]
pub mod server;
pub mod service;
pub mod store;

pub use error::{Error, Result};
pub use record::{Record, RecordError};
pub use service::{GetOutcome, PutOutcome, Service};
pub use store::{DEFAULT_PARTITION, MAX_KEY_LEN, RecordStore, Store, StoreError};
