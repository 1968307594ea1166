//! # artmap - Adaptive Radix Tree ordered map
//!
//! An in-memory ordered map from byte-string keys to caller-owned values, implemented as an
//! Adaptive Radix Tree (ART): a path-compressed trie whose nodes adapt their branch storage
//! to their fan-out.
//!
//! ## Overview
//!
//! - **Adaptive nodes**: four branch widths (4, 16, 48, 256 children) chosen per node as
//!   density changes, grown and shrunk in place
//! - **Path compression**: runs of single-branch bytes are stored once, as a per-node prefix
//! - **Prefix keys coexist**: every node carries its own value slot, so `"a"`, `"ab"` and
//!   `"abc"` are independent entries and no key terminator is ever appended
//! - **Ordered iteration**: full traversal and seek ("smallest key >= k") both yield entries
//!   in strict lexicographic order
//!
//! ## Quick Start
//!
//! ```rust
//! use artmap::{AdaptiveRadixTree, VectorKey};
//!
//! let mut tree = AdaptiveRadixTree::<VectorKey, String>::new();
//!
//! // Insert some data
//! tree.insert("hello", "world".to_string());
//! tree.insert("foo", "bar".to_string());
//!
//! // Query the tree
//! assert_eq!(tree.get("hello"), Some(&"world".to_string()));
//! assert_eq!(tree.get("missing"), None);
//!
//! // Iterate over entries in key order
//! for (key, value) in tree.iter() {
//!     println!("{:?} -> {}", key.as_ref(), value);
//! }
//!
//! // Or start from the first key >= a seek key
//! assert_eq!(tree.iter_from("g").count(), 1);
//! ```
//!
//! ## Key Types
//!
//! Two key representations are provided:
//!
//! - [`ArrayKey<N>`]: fixed-capacity keys up to N bytes, stack-allocated
//! - [`VectorKey`]: variable-size keys, heap-allocated
//!
//! Both convert from common Rust types:
//!
//! ```rust
//! use artmap::{ArrayKey, VectorKey};
//!
//! // From string literals
//! let key1: ArrayKey<16> = "hello".into();
//! let key2: VectorKey = "world".into();
//!
//! // From numeric types (big-endian, so numeric order is key order)
//! let key3: ArrayKey<8> = 42u64.into();
//! let key4: VectorKey = 1337u32.into();
//!
//! // From raw bytes, zero bytes included
//! let key5: VectorKey = b"a\0b".into();
//! ```
//!
//! The tree is single-threaded: no internal synchronization, no suspension points. Values
//! are owned by the caller; replace and remove hand the previous value back, and dropping
//! the tree releases only the values still bound.

// Private implementation modules
mod node;

// Internal modules (public for benchmarking, not part of stable API)
#[doc(hidden)]
pub mod mapping;
#[doc(hidden)]
pub mod utils;

// Public API modules
pub mod iter;
pub mod keys;
pub mod partials;
pub mod tree;

// Re-export main types for convenience
pub use keys::{array_key::ArrayKey, vector_key::VectorKey, KeyTrait};
pub use partials::Partial;
pub use tree::AdaptiveRadixTree;
