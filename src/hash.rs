//! Bucket-selection hash: Paul Hsieh's SuperFastHash over raw key bytes.
//!
//! This is a distribution function, not a cryptographic hash. It must be
//! deterministic across calls and processes (bucket choice is part of the
//! table's observable behavior), so there is no per-instance seeding.

/// Two key bytes interpreted as a little-endian 16-bit value.
#[inline]
fn get16(d: &[u8]) -> u32 {
    u32::from(u16::from_le_bytes([d[0], d[1]]))
}

/// Hashes exactly `data.len()` bytes; embedded NULs are ordinary bytes.
///
/// Seeds the accumulator with the length, folds in 16-bit pairs with
/// shift/xor/add mixing and a `hash += hash >> 11` feedback, handles the
/// 0-3 trailing bytes with size-specific cases, then applies a fixed
/// avalanche finisher so small input differences spread across all bits.
/// An empty key hashes to 0 (degenerate bucket choice; table operations
/// reject empty keys before getting here).
pub fn super_fast_hash(data: &[u8]) -> u32 {
    if data.is_empty() {
        return 0;
    }
    let mut hash = data.len() as u32;

    let mut blocks = data.chunks_exact(4);
    for block in &mut blocks {
        hash = hash.wrapping_add(get16(&block[..2]));
        let tmp = (get16(&block[2..]) << 11) ^ hash;
        hash = (hash << 16) ^ tmp;
        hash = hash.wrapping_add(hash >> 11);
    }

    let tail = blocks.remainder();
    match tail.len() {
        3 => {
            hash = hash.wrapping_add(get16(tail));
            hash ^= hash << 16;
            hash ^= u32::from(tail[2]) << 18;
            hash = hash.wrapping_add(hash >> 11);
        }
        2 => {
            hash = hash.wrapping_add(get16(tail));
            hash ^= hash << 11;
            hash = hash.wrapping_add(hash >> 17);
        }
        1 => {
            hash = hash.wrapping_add(u32::from(tail[0]));
            hash ^= hash << 10;
            hash = hash.wrapping_add(hash >> 1);
        }
        _ => {}
    }

    // Avalanche finisher.
    hash ^= hash << 3;
    hash = hash.wrapping_add(hash >> 5);
    hash ^= hash << 4;
    hash = hash.wrapping_add(hash >> 17);
    hash ^= hash << 25;
    hash = hash.wrapping_add(hash >> 6);
    hash
}

/// Maps a key to a bucket index in `[0, nbuckets)`. Same key and bucket
/// count always yield the same index.
#[inline]
pub fn bucket_index(key: &[u8], nbuckets: usize) -> usize {
    debug_assert!(nbuckets > 0);
    super_fast_hash(key) as usize % nbuckets
}
