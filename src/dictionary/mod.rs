//! Dictionary module: storage, traversal and change notification.
//!
//! ## Architecture
//!
//! The dictionary is a singly-linked chain of entries with:
//!
//! - **Slab-based storage**: every entry lives in one arena, links are slab keys
//! - **Head insertion**: new entries become the head, so iteration runs
//!   newest first
//! - **Observer lists**: one ordered list per event kind
//!
//! ## Components
//!
//! - [`EntryNode`]: Key/value pair with the link to the next entry
//! - [`Chain`]: Head pointer and count, scan and unlink helpers
//! - [`ObserverRegistry`]: Observer lists and synchronous dispatch
//! - [`LinkedDictionary`]: The public mapping contract
//! - [`Iter`] / [`IntoIter`]: Head-to-tail iterators
//!
//! ## Example
//!
//! ```
//! use linked_dictionary::dictionary::LinkedDictionary;
//!
//! let mut dict = LinkedDictionary::new();
//! dict.on_item_added(|event| {
//!     println!("Item with key {} was added", event.key());
//!     Ok(())
//! });
//!
//! dict.add(1, "One").unwrap();
//! dict.set(2, "Two").unwrap();
//!
//! assert_eq!(dict.keys(), [2, 1]);
//! ```

pub mod node;
pub mod chain;
pub mod observers;
pub mod iter;
pub mod map;

pub use node::EntryNode;
pub use chain::{Chain, Located};
pub use observers::ObserverRegistry;
pub use iter::{IntoIter, Iter};
pub use map::LinkedDictionary;
