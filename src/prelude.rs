//! Convenient re-exports for common usage patterns.
//!
//! ```ignore
//! use gnolly::prelude::*;
//!
//! let service = Service::new(Store::open("gnolly.db", DEFAULT_PARTITION)?);
//! service.put("k", "v");
//! ```

pub use crate::error::{Error, Result};
pub use crate::record::{Record, RecordError};
pub use crate::service::{GetOutcome, PutOutcome, Service};
pub use crate::store::{DEFAULT_PARTITION, MAX_KEY_LEN, RecordStore, Store, StoreError};
