//! Core data types for the linked dictionary
//!
//! ## Types
//!
//! - [`EntryKey`]: Trait every key type implements (equality + absent check)
//! - [`EventKind`]: The four kinds of change notification
//! - [`KeyEvent`]: Payload passed to keyed observers
//! - [`SubscriptionId`]: Handle for unregistering an observer
//! - [`DictionaryError`]: Error taxonomy for every operation

mod key;
mod event;
mod error;

// Re-export all types at module level
pub use key::EntryKey;
pub use event::{EventKind, KeyEvent, SubscriptionId};
pub use error::{DictionaryError, ObserverError, Result};
