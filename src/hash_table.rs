//! HashTable: fixed array of queue buckets selected by a byte-string hash.

use crate::hash;
use crate::queue::{self, Queue};

/// A keyed index over opaque elements: `nbuckets` independent [`Queue`]s
/// plus a deterministic hash mapping each key to one of them.
///
/// Keyed operations hash the key once and delegate to exactly that
/// bucket; the table never probes other buckets and never inspects queue
/// internals. Colliding and duplicate keys coexist in one bucket in
/// insertion order; the table enforces no uniqueness. The bucket count
/// is fixed for the table's lifetime (no rehashing).
#[derive(Debug)]
pub struct HashTable<E> {
    buckets: Vec<Queue<E>>,
}

/// Rejected table construction.
#[derive(Debug, PartialEq, Eq)]
pub enum OpenError {
    /// A table needs at least one bucket; zero is rejected up front
    /// rather than producing a table on which every operation fails.
    ZeroBuckets,
}

/// Rejected insertion.
#[derive(Debug, PartialEq, Eq)]
pub enum PutError {
    /// Empty keys are rejected at the table boundary; the hash would
    /// degenerate to bucket 0 and lookups could never distinguish them.
    EmptyKey,
}

impl<E> HashTable<E> {
    /// Creates a table with `nbuckets` empty buckets. The count is
    /// immutable thereafter.
    pub fn new(nbuckets: usize) -> Result<Self, OpenError> {
        if nbuckets == 0 {
            return Err(OpenError::ZeroBuckets);
        }
        let mut buckets = Vec::with_capacity(nbuckets);
        buckets.resize_with(nbuckets, Queue::new);
        Ok(Self { buckets })
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total elements across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Queue::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Queue::is_empty)
    }

    #[inline]
    fn bucket_of(&self, key: &[u8]) -> usize {
        hash::bucket_index(key, self.buckets.len())
    }

    /// Appends `element` to the bucket selected by `key`. Rejects an
    /// empty key with no mutation; otherwise always succeeds, even if
    /// other elements were stored under the same key.
    pub fn put(&mut self, element: E, key: &[u8]) -> Result<(), PutError> {
        if key.is_empty() {
            return Err(PutError::EmptyKey);
        }
        let bucket = self.bucket_of(key);
        self.buckets[bucket].put(element);
        Ok(())
    }

    /// Searches only the bucket selected by `key`, front to rear,
    /// returning the first element for which `pred` holds. `None` for an
    /// empty key or when nothing in that bucket matches.
    ///
    /// `pred` decides what "matches" means; callers looking up by exact
    /// key capture the key in the closure and compare it against the
    /// element's own key field.
    pub fn search<P>(&self, key: &[u8], pred: P) -> Option<&E>
    where
        P: FnMut(&E) -> bool,
    {
        if key.is_empty() {
            return None;
        }
        self.buckets[self.bucket_of(key)].search(pred)
    }

    /// Same targeting as [`HashTable::search`], but excises the first
    /// matching element from its bucket and returns it by value.
    pub fn remove<P>(&mut self, key: &[u8], pred: P) -> Option<E>
    where
        P: FnMut(&E) -> bool,
    {
        if key.is_empty() {
            return None;
        }
        let bucket = self.bucket_of(key);
        self.buckets[bucket].remove(pred)
    }

    /// Invokes `visitor` on every element: buckets in ascending index
    /// order, front to rear within each bucket. No cross-bucket ordering
    /// beyond that. Read-only traversal.
    pub fn apply<F>(&self, mut visitor: F)
    where
        F: FnMut(&E),
    {
        for element in self.iter() {
            visitor(element);
        }
    }

    /// Chain length of the bucket `key` selects (all elements sharing
    /// that bucket, not only exact-key matches). 0 for an empty key.
    pub fn bucket_len(&self, key: &[u8]) -> usize {
        if key.is_empty() {
            return 0;
        }
        self.buckets[self.bucket_of(key)].len()
    }

    /// Borrowing iterator over every element, in `apply` order.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            buckets: self.buckets.iter(),
            current: None,
        }
    }
}

/// Iterator over all elements of a table: ascending bucket index,
/// front-to-rear within each bucket.
pub struct Iter<'a, E> {
    buckets: std::slice::Iter<'a, Queue<E>>,
    current: Option<queue::Iter<'a, E>>,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(chain) = self.current.as_mut() {
                if let Some(element) = chain.next() {
                    return Some(element);
                }
            }
            self.current = Some(self.buckets.next()?.iter());
        }
    }
}

impl<'a, E> IntoIterator for &'a HashTable<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
