//! Error types for dictionary operations.
//!
//! Every error is synchronous and signals misuse or absent data. Validation
//! errors are raised before the chain is scanned or mutated, so a failed call
//! never leaves a partial update behind. The one exception is
//! [`DictionaryError::Observer`]: the mutation has already been applied when
//! an observer fails.

use thiserror::Error;

use crate::types::EventKind;

/// Error type returned by observers.
///
/// Boxed so an observer can use `?` on any error type.
pub type ObserverError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors from dictionary operations.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// A required argument was absent
    #[error("{argument} cannot be null")]
    InvalidArgument {
        /// Name of the rejected argument
        argument: &'static str,
    },

    /// Strict lookup found no entry with the key
    #[error("key {key} was not present in the dictionary")]
    KeyNotFound {
        /// Debug rendering of the missing key
        key: String,
    },

    /// Insertion found an entry with an equal key
    #[error("an element with key {key} already exists in the dictionary")]
    DuplicateKey {
        /// Debug rendering of the duplicate key
        key: String,
    },

    /// Copy offset lies past the end of the destination
    #[error("offset {offset} is out of range for a destination of length {len}")]
    IndexOutOfRange {
        /// Requested start offset
        offset: usize,
        /// Destination length
        len: usize,
    },

    /// Destination has too few slots after the offset
    #[error("not enough space to fit all elements: need {required}, have {available}")]
    InsufficientCapacity {
        /// Number of entries to copy
        required: usize,
        /// Slots between offset and the end of the destination
        available: usize,
    },

    /// An observer failed while handling a notification
    #[error("observer failed while handling {event} notification")]
    Observer {
        /// Event being dispatched when the observer failed
        event: EventKind,
        /// Error returned by the observer
        #[source]
        source: ObserverError,
    },
}

impl DictionaryError {
    pub(crate) fn key_not_found<K: std::fmt::Debug + ?Sized>(key: &K) -> Self {
        Self::KeyNotFound {
            key: format!("{key:?}"),
        }
    }

    pub(crate) fn duplicate_key<K: std::fmt::Debug + ?Sized>(key: &K) -> Self {
        Self::DuplicateKey {
            key: format!("{key:?}"),
        }
    }
}

/// Result alias for dictionary operations
pub type Result<T> = std::result::Result<T, DictionaryError>;

// ============================================================================
// Unit Tests
// ============================================================================
