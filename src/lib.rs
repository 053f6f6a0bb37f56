//! # Linked Dictionary
//!
//! Observable key-value dictionary built on a singly-linked chain of entries.
//!
//! ## Architecture
//!
//! The crate consists of:
//! - **Types**: Key trait, event payloads, error taxonomy
//! - **Dictionary**: Slab-backed entry chain with observer dispatch
//!
//! ## Design Principles
//!
//! 1. **Linear scans**: No hashing or tree index; every lookup walks the chain
//! 2. **Head insertion**: Iteration yields entries newest first
//! 3. **Validate, then mutate**: Argument errors never leave partial updates
//! 4. **Synchronous notification**: Observers run before the mutating call
//!    returns, in registration order
//!
//! ## Example
//!
//! ```
//! use linked_dictionary::{EventKind, LinkedDictionary};
//!
//! let mut dict = LinkedDictionary::new();
//! dict.on_cleared(|| {
//!     println!("Dictionary was cleared");
//!     Ok(())
//! });
//!
//! dict.add(1, "One").unwrap();
//! dict.add(2, "Two").unwrap();
//! assert_eq!(dict.keys(), [2, 1]);
//!
//! dict.clear().unwrap();
//! assert!(dict.is_empty());
//! assert_eq!(dict.observer_count(EventKind::DictionaryCleared), 1);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: EntryKey, EventKind, DictionaryError
pub mod types;

/// Dictionary: slab-backed linked chain with observers
pub mod dictionary;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{DictionaryError, EntryKey, EventKind, KeyEvent, ObserverError, Result, SubscriptionId};
pub use dictionary::{IntoIter, Iter, LinkedDictionary};
