//! Record storage backed by fjall.

use std::path::Path;
use std::string::FromUtf8Error;

use fjall::{Keyspace, KeyspaceCreateOptions, PersistMode};
use thiserror::Error;

use crate::logging::{debug, info, trace, warn};
use crate::record::Record;

/// Partition used when none is configured.
pub const DEFAULT_PARTITION: &str = "main";

/// Largest key the engine accepts, in bytes.
pub const MAX_KEY_LEN: usize = u16::MAX as usize;

/// Longest partition name accepted, in bytes.
pub const MAX_PARTITION_NAME_LEN: usize = 255;

/// Errors raised by the storage engine.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Fjall(#[from] fjall::Error),

    #[error("invalid partition name '{0}': use 1-255 ASCII letters, digits, '_' or '-'")]
    InvalidPartition(String),

    #[error("key is {len} bytes, the engine accepts at most {max}")]
    KeyTooLarge { len: usize, max: usize },

    #[error("stored value for key '{key}' is not valid UTF-8: {source}")]
    InvalidValue {
        key: String,
        #[source]
        source: FromUtf8Error,
    },
}

/// Put/get access to records.
///
/// [`Store`] is the durable implementation; the [`Service`](crate::Service)
/// only depends on this trait.
pub trait RecordStore: Send + Sync {
    /// Durably write `record`, replacing any previous value for its key.
    fn put(&self, record: &Record) -> Result<(), StoreError>;

    /// Read the record stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<Record>, StoreError>;
}

/// A single-partition record store backed by a fjall database.
///
/// The store owns the engine handle. It is released when the store is
/// dropped or explicitly [closed](Self::close), so every exit path that
/// drops the store closes the database.
///
/// # Example
///
/// ```no_run
/// use gnolly::{Record, RecordStore, Store};
///
/// let store = Store::open("gnolly.db", "main")?;
/// store.put(&Record::new("a", "1")?)?;
/// assert_eq!(store.get("a")?.map(|r| r.value().to_string()), Some("1".to_string()));
/// store.close()?;
/// # Ok::<(), gnolly::Error>(())
/// ```
pub struct Store {
    db: fjall::Database,
    partition: Keyspace,
}

impl Store {
    /// Open the database at `path`, creating it and `partition` if missing.
    pub fn open(path: impl AsRef<Path>, partition: &str) -> Result<Self, StoreError> {
        let path = path.as_ref();
        debug!(path = %path.display(), partition, "opening store");

        if !is_valid_partition_name(partition) {
            return Err(StoreError::InvalidPartition(partition.to_string()));
        }

        let db = fjall::Database::builder(path).open()?;
        let partition_handle = db.keyspace(partition, KeyspaceCreateOptions::default)?;

        info!(path = %path.display(), partition, "store opened");
        Ok(Self {
            db,
            partition: partition_handle,
        })
    }

    /// Flush the journal to disk and release the engine handle.
    pub fn close(self) -> Result<(), StoreError> {
        self.db.persist(PersistMode::SyncAll)?;
        debug!("store closed");
        Ok(())
    }
}

fn is_valid_partition_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_PARTITION_NAME_LEN
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

impl RecordStore for Store {
    fn put(&self, record: &Record) -> Result<(), StoreError> {
        trace!(key = record.key(), "put");
        let len = record.key().len();
        if len > MAX_KEY_LEN {
            return Err(StoreError::KeyTooLarge {
                len,
                max: MAX_KEY_LEN,
            });
        }

        self.partition.insert(record.key(), record.value().as_bytes())?;
        // Commit: the write is only acknowledged once the journal is synced.
        self.db.persist(PersistMode::SyncAll)?;
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Record>, StoreError> {
        trace!(key, "get");
        // Such keys can never have been written.
        if key.is_empty() || key.len() > MAX_KEY_LEN {
            return Ok(None);
        }

        let Some(bytes) = self.partition.get(key)? else {
            return Ok(None);
        };

        let value = String::from_utf8(bytes.to_vec()).map_err(|source| {
            warn!(key, "stored value is not valid UTF-8");
            StoreError::InvalidValue {
                key: key.to_string(),
                source,
            }
        })?;

        // Empty keys and values are never written, so treat them as absent.
        Ok(Record::new(key, value).ok())
    }
}
