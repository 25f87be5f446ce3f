//! Crate-internal log macros.
//!
//! With the `logging` feature these are `tracing`'s own macros. Without it
//! every level is `noop!`, which swallows its arguments, so the store and
//! service carry no logging cost for callers that did not ask for it.
//!
//! ```rust,ignore
//! use crate::logging::{debug, error};
//!
//! debug!(path = %path.display(), "opening store");
//! error!(key, error = %err, "get failed");
//! ```

#[cfg(feature = "logging")]
pub(crate) use tracing::{debug, error, info, trace, warn};

#[cfg(not(feature = "logging"))]
macro_rules! noop {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
pub(crate) use noop as debug;
#[cfg(not(feature = "logging"))]
pub(crate) use noop as error;
#[cfg(not(feature = "logging"))]
pub(crate) use noop as info;
#[cfg(not(feature = "logging"))]
pub(crate) use noop as trace;
#[cfg(not(feature = "logging"))]
pub(crate) use noop as warn;
