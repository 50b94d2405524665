#![cfg(test)]

// Property tests for HashTable against a flat insertion-order model,
// kept inside the crate next to the implementation they exercise.

use crate::hash_table::HashTable;
use proptest::prelude::*;

// Element with its own copy of the key, as a caller indexing records
// would store; the table itself never reads it.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Rec {
    key: Vec<u8>,
    id: u32,
}

// Pool-indexed operations to improve shrinking: key indices shrink to
// earlier keys, the pool shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize),
    Search(usize),
    Remove(usize),
    Apply,
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<Vec<u8>>, Vec<OpI>)> {
    let pool = proptest::collection::vec(
        proptest::collection::vec(any::<u8>(), 1..6),
        1..=8,
    );
    (1usize..16, pool).prop_flat_map(|(nbuckets, pool)| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            idx.clone().prop_map(OpI::Put),
            idx.clone().prop_map(OpI::Search),
            idx.prop_map(OpI::Remove),
            Just(OpI::Apply),
        ];
        proptest::collection::vec(op, 1..80)
            .prop_map(move |ops| (nbuckets, pool.clone(), ops))
    })
}

// The model resolves exact-key lookups by insertion order. That matches
// the table because all elements sharing a key share a bucket, and a
// bucket is FIFO: the model's first occurrence of the key is also the
// bucket's first match.
fn model_find(model: &[Rec], key: &[u8]) -> Option<usize> {
    model.iter().position(|e| e.key == key)
}

// Property: state-machine equivalence against the flat model.
// Invariants exercised across random operation sequences, bucket counts,
// and arbitrary-byte keys (duplicates included):
// - put always succeeds for a non-empty key; duplicates coexist.
// - search returns the model's first occurrence of the key, or None.
// - remove excises exactly that occurrence; len stays in parity.
// - apply visits each live element exactly once (multiset equality).
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((nbuckets, pool, ops) in arb_scenario()) {
        let mut sut: HashTable<Rec> = HashTable::new(nbuckets).expect("nbuckets > 0");
        let mut model: Vec<Rec> = Vec::new();
        let mut next_id = 0u32;

        for op in ops {
            match op {
                OpI::Put(i) => {
                    let key = pool[i].clone();
                    let e = Rec { key: key.clone(), id: next_id };
                    next_id += 1;
                    sut.put(e.clone(), &key).expect("non-empty key");
                    model.push(e);
                }
                OpI::Search(i) => {
                    let key = &pool[i];
                    let got = sut.search(key, |e| e.key == *key);
                    let want = model_find(&model, key).map(|p| &model[p]);
                    prop_assert_eq!(got, want);
                }
                OpI::Remove(i) => {
                    let key = &pool[i];
                    let got = sut.remove(key, |e| e.key == *key);
                    let want = model_find(&model, key).map(|p| model.remove(p));
                    prop_assert_eq!(got, want);
                }
                OpI::Apply => {
                    let mut seen: Vec<u32> = Vec::new();
                    sut.apply(|e| seen.push(e.id));
                    seen.sort_unstable();
                    let mut want: Vec<u32> = model.iter().map(|e| e.id).collect();
                    want.sort_unstable();
                    prop_assert_eq!(seen, want);
                }
            }

            // Post-conditions after each op
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
        }
    }
}

// Property: bucket choice is a pure function of the key — repeating a
// lookup never changes its answer, and elements put under one key are
// reachable under exactly that key's bucket.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_lookup_is_repeatable(
        nbuckets in 1usize..16,
        keys in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 1..6), 1..20),
    ) {
        let mut sut: HashTable<Rec> = HashTable::new(nbuckets).expect("nbuckets > 0");
        for (i, key) in keys.iter().enumerate() {
            sut.put(Rec { key: key.clone(), id: i as u32 }, key).expect("non-empty key");
        }
        for key in &keys {
            let first = sut.search(key, |e| e.key == *key).cloned();
            let second = sut.search(key, |e| e.key == *key).cloned();
            prop_assert!(first.is_some());
            prop_assert_eq!(first, second);
            prop_assert!(sut.bucket_len(key) >= 1);
        }
    }
}
