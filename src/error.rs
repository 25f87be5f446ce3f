//! Unified error type for the gnolly library.
//!
//! Most callers only ever see [`RecordError`] or [`StoreError`]; [`Error`]
//! wraps both so application code can use a single `?`-friendly type.

use thiserror::Error;

use crate::record::RecordError;
use crate::store::StoreError;

/// Unified error type for all gnolly operations.
///
/// ```ignore
/// use gnolly::{Record, RecordStore, Result, Store};
///
/// fn seed(store: &Store) -> Result<()> {
///     store.put(&Record::new("a", "1")?)?;
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A key or value failed validation.
    #[error(transparent)]
    Record(#[from] RecordError),

    /// The storage engine failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if this is a validation error.
    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    /// Returns `true` if this is a storage error.
    pub fn is_store(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}
