//! The validated key/value unit stored by gnolly.

use thiserror::Error;

/// Errors raised when constructing a [`Record`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
    #[error("empty key")]
    EmptyKey,

    #[error("empty value")]
    EmptyValue,
}

/// A key/value pair with a non-empty key and a non-empty value.
///
/// Records are immutable once built. They have no identity beyond their key
/// and are only ever persisted as raw `key -> value` bytes.
///
/// # Example
///
/// ```
/// use gnolly::{Record, RecordError};
///
/// let record = Record::new("greeting", "hello")?;
/// assert_eq!(record.key(), "greeting");
/// assert_eq!(record.value(), "hello");
///
/// assert_eq!(Record::new("", "hello"), Err(RecordError::EmptyKey));
/// assert_eq!(Record::new("greeting", ""), Err(RecordError::EmptyValue));
/// # Ok::<(), RecordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    key: String,
    value: String,
}

impl Record {
    /// Validate and build a record. The key is checked before the value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Result<Self, RecordError> {
        let key = key.into();
        if key.is_empty() {
            return Err(RecordError::EmptyKey);
        }

        let value = value.into();
        if value.is_empty() {
            return Err(RecordError::EmptyValue);
        }

        Ok(Self { key, value })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consume the record, returning `(key, value)`.
    pub fn into_parts(self) -> (String, String) {
        (self.key, self.value)
    }
}
