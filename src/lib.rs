//! # Linear Probing Map
//!
//! A Rust implementation of an open-addressing hash table with linear probing.
//!
//! `LinearMap` stores every entry directly in one slot array, so inserting an
//! entry never allocates on its own; only growing the table does. Deleted
//! entries leave tombstones that keep probe chains intact until the next
//! growth rehashes the table. The table doubles whenever an insertion would
//! exceed its fill ratio and never shrinks.
//!
//! Keys supply their own 64-bit hash through the [`ProbeKey`] trait. Unsigned
//! integers hash to themselves; any `Hash + Eq` type can be wrapped in
//! [`Hashed`] to use the standard library hasher.
//!
//! ## Basic Usage
//!
//! ```rust
//! use lpmap::{Hashed, LinearMap};
//!
//! // Expect around 100 entries, keep the table at most half full
//! let mut map = LinearMap::new(100, 0.5);
//!
//! // Insert values
//! map.set(Hashed("apple"), 1);
//! map.set(Hashed("banana"), 2);
//!
//! // Retrieve values
//! assert_eq!(map.get(&Hashed("apple")), Some(&1));
//!
//! // Update values
//! map.set(Hashed("apple"), 10);
//! assert_eq!(map.get(&Hashed("apple")), Some(&10));
//! assert_eq!(map.len(), 2);
//!
//! // Delete values
//! assert!(map.delete(&Hashed("apple")));
//! assert_eq!(map.get(&Hashed("apple")), None);
//! ```
//!
//! ## Custom Keys
//!
//! ```rust
//! use lpmap::{LinearMap, ProbeKey};
//!
//! #[derive(PartialEq, Eq)]
//! struct UserId(u32);
//!
//! impl ProbeKey for UserId {
//!     fn probe_hash(&self) -> u64 {
//!         u64::from(self.0).wrapping_mul(0x9E37_79B9_7F4A_7C15)
//!     }
//! }
//!
//! let mut users = LinearMap::new(0, 0.5);
//! users.set(UserId(7), "ada");
//! assert_eq!(users.values().count(), 1);
//! ```
//!
//! ## Concurrency
//!
//! `LinearMap` has no internal synchronization. Share it between threads only
//! behind a lock held for the whole of each call, or each iteration:
//!
//! ```rust
//! use lpmap::LinearMap;
//! use std::sync::{Arc, Mutex};
//! use std::thread;
//!
//! let map = Arc::new(Mutex::new(LinearMap::<u64, u64>::new(0, 0.5)));
//!
//! let handles: Vec<_> = (0..4_u64)
//!     .map(|t| {
//!         let map = Arc::clone(&map);
//!         thread::spawn(move || {
//!             for i in 0..100 {
//!                 map.lock().unwrap().set(t * 100 + i, i);
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(map.lock().unwrap().len(), 400);
//! ```

/// Construction parameters
mod config;
/// Error type for fallible operations
mod error;
/// The key hashing capability
mod key;
/// The linear-probing table
mod linear_map;
/// Probe-length statistics
mod stats;

pub use config::{DEFAULT_FILL_RATIO, MapConfig};
pub use error::LpMapError;
pub use key::{Hashed, ProbeKey};
pub use linear_map::{Iter, Keys, LinearMap, Values};
pub use stats::ProbeStats;
