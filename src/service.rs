//! Request-level operations on top of a [`RecordStore`].
//!
//! The service never fails a caller: validation and storage errors come back
//! as outcomes, which the transport encodes into its response payloads.

use crate::logging::{debug, error};
use crate::record::{Record, RecordError};
use crate::store::{RecordStore, StoreError};

/// Result of a put request.
#[derive(Debug)]
pub enum PutOutcome {
    /// The record was durably written.
    Stored,
    /// The key or value failed validation; nothing was written.
    Invalid(RecordError),
    /// The storage engine rejected the write.
    Failed(StoreError),
}

impl PutOutcome {
    pub fn is_stored(&self) -> bool {
        matches!(self, Self::Stored)
    }

    /// Human-readable failure message, empty on success.
    pub fn error_message(&self) -> String {
        match self {
            Self::Stored => String::new(),
            Self::Invalid(err) => err.to_string(),
            Self::Failed(err) => err.to_string(),
        }
    }
}

/// Result of a get request.
#[derive(Debug)]
pub enum GetOutcome {
    Found(Record),
    NotFound,
    /// The read failed. Clients see the same empty value as `NotFound`.
    Failed(StoreError),
}

impl GetOutcome {
    /// The value to report, empty unless the key was found.
    pub fn value(&self) -> &str {
        match self {
            Self::Found(record) => record.value(),
            Self::NotFound | Self::Failed(_) => "",
        }
    }
}

/// Validates requests into [`Record`]s and runs them against a store.
pub struct Service<S> {
    store: S,
}

impl<S: RecordStore> Service<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Give back the store, e.g. to close it on shutdown.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Validate `key`/`value` and write them.
    pub fn put(&self, key: &str, value: &str) -> PutOutcome {
        let record = match Record::new(key, value) {
            Ok(record) => record,
            Err(err) => {
                debug!(key, error = %err, "rejected put");
                return PutOutcome::Invalid(err);
            }
        };

        match self.store.put(&record) {
            Ok(()) => PutOutcome::Stored,
            Err(err) => {
                error!(key, error = %err, "put failed");
                PutOutcome::Failed(err)
            }
        }
    }

    /// Look up `key`. Absent keys are [`GetOutcome::NotFound`].
    pub fn get(&self, key: &str) -> GetOutcome {
        match self.store.get(key) {
            Ok(Some(record)) => GetOutcome::Found(record),
            Ok(None) => GetOutcome::NotFound,
            Err(err) => {
                error!(key, error = %err, "get failed");
                GetOutcome::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{DEFAULT_PARTITION, Store};
    use tempfile::TempDir;

    /// A store whose engine is always broken.
    struct FailingStore;

    impl FailingStore {
        fn error() -> StoreError {
            StoreError::InvalidValue {
                key: "broken".to_string(),
                source: match String::from_utf8(vec![0xff]) {
                    Ok(_) => unreachable!(),
                    Err(e) => e,
                },
            }
        }
    }

    impl RecordStore for FailingStore {
        fn put(&self, _record: &Record) -> Result<(), StoreError> {
            Err(Self::error())
        }

        fn get(&self, _key: &str) -> Result<Option<Record>, StoreError> {
            Err(Self::error())
        }
    }

    fn service() -> anyhow::Result<(Service<Store>, TempDir)> {
        let dir = TempDir::new()?;
        let store = Store::open(dir.path(), DEFAULT_PARTITION)?;
        Ok((Service::new(store), dir))
    }

    #[test]
    fn test_put_then_get() -> anyhow::Result<()> {
        let (service, _dir) = service()?;

        let outcome = service.put("a", "1");
        assert!(outcome.is_stored());
        assert_eq!(outcome.error_message(), "");

        let outcome = service.get("a");
        assert!(matches!(outcome, GetOutcome::Found(_)));
        assert_eq!(outcome.value(), "1");
        Ok(())
    }

    #[test]
    fn test_put_validation() -> anyhow::Result<()> {
        let (service, _dir) = service()?;

        assert!(matches!(
            service.put("", "v"),
            PutOutcome::Invalid(RecordError::EmptyKey)
        ));
        assert!(matches!(
            service.put("k", ""),
            PutOutcome::Invalid(RecordError::EmptyValue)
        ));
        assert!(matches!(service.get("k"), GetOutcome::NotFound));
        Ok(())
    }

    #[test]
    fn test_get_missing_is_empty() -> anyhow::Result<()> {
        let (service, _dir) = service()?;

        let outcome = service.get("never-written");
        assert!(matches!(outcome, GetOutcome::NotFound));
        assert_eq!(outcome.value(), "");
        Ok(())
    }

    #[test]
    fn test_storage_failure_reported_by_put() {
        let service = Service::new(FailingStore);

        let outcome = service.put("k", "v");
        assert!(matches!(outcome, PutOutcome::Failed(_)));
        assert!(outcome.error_message().contains("not valid UTF-8"));
    }

    #[test]
    fn test_storage_failure_hidden_by_get() {
        let service = Service::new(FailingStore);

        let outcome = service.get("k");
        assert!(matches!(outcome, GetOutcome::Failed(_)));
        assert_eq!(outcome.value(), "");
    }

    #[test]
    fn test_validation_precedes_storage() {
        let service = Service::new(FailingStore);

        assert!(matches!(
            service.put("", "v"),
            PutOutcome::Invalid(RecordError::EmptyKey)
        ));
    }
}
