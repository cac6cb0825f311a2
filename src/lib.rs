#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bucket;

pub mod growth;
pub mod hash_map;
pub mod hash_set;
pub mod hash_table;
pub mod overflow;

pub use bucket::HashCache;
pub use bucket::NoStoredHash;
pub use bucket::StoredHash;
pub use growth::CapacityError;
pub use growth::GrowthPolicy;
pub use growth::ModuloGrowth;
pub use growth::PowerOfTwoGrowth;
pub use growth::PrimeGrowth;
pub use hash_map::Entry;
pub use hash_map::HashMap;
pub use hash_map::SortedHashMap;
pub use hash_set::HashSet;
pub use hash_set::SortedHashSet;
pub use hash_table::HashTable;

/// Hasher builder used by [`HashMap`] and [`HashSet`] unless another is
/// supplied.
pub type DefaultHashBuilder = foldhash::fast::RandomState;
