#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// A HashMap implementation using Robin Hood hashing.
///
/// This module provides a `HashMap` that wraps the `HashTable` and provides
/// a standard key-value map interface with configurable hashers.
pub mod hash_map;

/// The core Robin Hood hash table keyed by caller-supplied hashes.
pub mod hash_table;

/// A hash set implementation using Robin Hood hashing.
///
/// This module provides a `HashSet` that wraps the `HashTable` and provides
/// a standard set interface with configurable hashers.
pub mod hash_set;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The default `BuildHasher` used by [`HashMap`] and [`HashSet`].
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else if #[cfg(feature = "std")] {
        /// The default `BuildHasher` used by [`HashMap`] and [`HashSet`].
        pub type DefaultHashBuilder = std::collections::hash_map::RandomState;
    } else {
        /// Inert placeholder hasher state. It does not implement
        /// `BuildHasher`; enable the `foldhash` or `std` feature for a usable
        /// default, or supply a hasher via `with_hasher`.
        #[derive(Clone, Copy, Debug, Default)]
        pub struct DefaultHashBuilder;
    }
}

pub use hash_map::Entry;
pub use hash_map::HashMap;
pub use hash_set::HashSet;
pub use hash_table::HashTable;
