//! queue-table: a fixed-bucket hash table whose collision chains are
//! FIFO queues, for indexing caller-owned records by byte-string keys.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep each layer small enough to reason about independently,
//!   with the bucket-selection policy isolated from chain maintenance.
//! - Layers:
//!   - Queue<E>: an arena-backed singly-linked FIFO with front/rear
//!     handles and a length counter. Supports O(1) append and pop-front,
//!     linear predicate search and removal, whole-queue concatenation,
//!     and front-to-rear traversal.
//!   - HashTable<E>: a fixed-length vector of independent Queue<E>
//!     buckets plus a deterministic byte-string hash. Every keyed
//!     operation hashes once and delegates to exactly one bucket; the
//!     table never inspects queue internals.
//!
//! Constraints
//! - Single-threaded: plain owned structures, no interior mutability;
//!   `&mut self` serializes mutation, `&self` traversals cannot
//!   structurally mutate.
//! - Elements are opaque: the container stores and returns them
//!   verbatim, never constructs, clones, or dereferences them. Callers
//!   that index shared data put in handle types (`&T`, `Rc<T>`, an id)
//!   and keep ownership of the referenced records for the container's
//!   whole lifetime.
//! - Bucket count is fixed at construction; there is no rehashing.
//!   Duplicate keys coexist in one bucket in insertion order.
//! - Ordering guarantee is FIFO within a bucket only; `apply` visits
//!   buckets in ascending index order but promises nothing about the
//!   relationship between elements of different buckets.
//!
//! Why this split?
//! - Localize invariants: the queue owns the front/rear/len chain
//!   invariant, the table owns "same key always hits the same bucket".
//! - Clear failure boundaries: invalid inputs (zero buckets, empty key)
//!   are rejected before any mutation; lookups signal absence with
//!   `None`, never an error.
//!
//! Hash policy
//! - Bucket selection uses SuperFastHash over the exact key bytes,
//!   seeded with the key length and finished with a fixed avalanche
//!   sequence. It is deterministic across calls and processes and is a
//!   distribution function only, not a cryptographic or DoS-resistant
//!   hash.
//!
//! Notes and non-goals
//! - No resizing; a bigger table is a new table.
//! - No uniqueness enforcement; `search`/`remove` take a caller
//!   predicate and return the first match in bucket order.
//! - `concat` consumes the second queue by value, so use-after-concat
//!   is a compile error rather than a runtime contract.
//! - Public API surface is `Queue` and `HashTable`; the hash function is
//!   an implementation detail (exposed only to benches via the
//!   `bench_internal` feature).

mod hash;
pub mod hash_table;
pub mod queue;

mod hash_table_proptest;
mod queue_proptest;

// Public surface
pub use hash_table::{HashTable, OpenError, PutError};
pub use queue::Queue;

#[cfg(feature = "bench_internal")]
pub use hash::super_fast_hash;
