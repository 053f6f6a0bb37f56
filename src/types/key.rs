//! Key trait for dictionary entries.
//!
//! ## Absent Keys
//!
//! A key can be *absent*: a value of the key type that carries no identity
//! (for example `Option::None`). Every keyed operation rejects an absent key
//! with [`DictionaryError::InvalidArgument`](crate::DictionaryError) before
//! touching the chain.
//!
//! Built-in scalar and string types are never absent. User types opt in with
//! an empty impl:
//!
//! ```
//! use linked_dictionary::EntryKey;
//!
//! #[derive(Debug, PartialEq)]
//! struct AccountId(u32);
//!
//! impl EntryKey for AccountId {}
//!
//! assert!(!AccountId(7).is_absent());
//! ```

use std::borrow::Cow;
use std::fmt::Debug;
use std::rc::Rc;
use std::sync::Arc;

/// A type usable as a dictionary key.
///
/// Keys are compared with `PartialEq` during a linear scan. `Debug` is used
/// to render the key in error messages and log fields.
pub trait EntryKey: PartialEq + Debug {
    /// Returns true if this key has no identity and must be rejected.
    #[inline]
    fn is_absent(&self) -> bool {
        false
    }
}

macro_rules! impl_present_key {
    ($($ty:ty),* $(,)?) => {
        $(impl EntryKey for $ty {})*
    };
}

impl_present_key!(
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    bool, char, String, str, (),
);

impl<T: EntryKey> EntryKey for Option<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        match self {
            Some(inner) => inner.is_absent(),
            None => true,
        }
    }
}

impl<T: EntryKey + ?Sized> EntryKey for &T {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: EntryKey + ?Sized> EntryKey for Box<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: EntryKey + ?Sized> EntryKey for Rc<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: EntryKey + ?Sized> EntryKey for Arc<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T> EntryKey for Cow<'_, T>
where
    T: EntryKey + ToOwned + ?Sized,
    T::Owned: Debug,
{
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<A: EntryKey, B: EntryKey> EntryKey for (A, B) {
    #[inline]
    fn is_absent(&self) -> bool {
        self.0.is_absent() || self.1.is_absent()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_keys_are_present() {
        assert!(!0u32.is_absent());
        assert!(!(-1i64).is_absent());
        assert!(!'x'.is_absent());
        assert!(!false.is_absent());
    }

    #[test]
    fn test_empty_string_is_present() {
        // An empty string still has an identity
        assert!(!String::new().is_absent());
        assert!(!"".is_absent());
    }

    #[test]
    fn test_option_none_is_absent() {
        assert!(None::<u32>.is_absent());
        assert!(!Some(5u32).is_absent());
        assert!(Some(None::<u32>).is_absent());
    }

    #[test]
    fn test_wrappers_delegate() {
        assert!(Box::new(None::<i32>).is_absent());
        assert!(!Rc::new(3u8).is_absent());
        assert!(!Arc::<str>::from("k").is_absent());
        assert!(!Cow::Borrowed("k").is_absent());
        assert!((&None::<char>).is_absent());
    }

    #[test]
    fn test_tuple_absent_if_any_part_absent() {
        assert!(!(1u8, 'a').is_absent());
        assert!((Some(1u8), None::<char>).is_absent());
    }
}
