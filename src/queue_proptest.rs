#![cfg(test)]

// Property tests for Queue against a VecDeque model, kept inside the
// crate next to the implementation they exercise.

use crate::queue::Queue;
use proptest::prelude::*;
use std::collections::VecDeque;

#[derive(Clone, Debug)]
enum Op {
    Put(i32),
    Get,
    Search(i32),
    Remove(i32),
    Apply,
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    // Small value range so Search/Remove hit live elements often.
    let op = prop_oneof![
        (0..16i32).prop_map(Op::Put),
        Just(Op::Get),
        (0..16i32).prop_map(Op::Search),
        (0..16i32).prop_map(Op::Remove),
        Just(Op::Apply),
    ];
    proptest::collection::vec(op, 1..80)
}

// Property: state-machine equivalence against VecDeque.
// Invariants exercised across random operation sequences:
// - `get` pops the model's front; both report empty identically.
// - `search` finds the same first match (front-to-rear) as the model.
// - `remove` excises the same element as removing the model's first
//   match, and the counts stay equal.
// - `apply` visits exactly the model's contents in the model's order.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_queue_matches_vecdeque(ops in arb_ops()) {
        let mut sut: Queue<i32> = Queue::new();
        let mut model: VecDeque<i32> = VecDeque::new();

        for op in ops {
            match op {
                Op::Put(v) => {
                    sut.put(v);
                    model.push_back(v);
                }
                Op::Get => {
                    prop_assert_eq!(sut.get(), model.pop_front());
                }
                Op::Search(v) => {
                    let got = sut.search(|&e| e == v).copied();
                    let want = model.iter().find(|&&e| e == v).copied();
                    prop_assert_eq!(got, want);
                }
                Op::Remove(v) => {
                    let got = sut.remove(|&e| e == v);
                    let want = model
                        .iter()
                        .position(|&e| e == v)
                        .map(|i| model.remove(i).expect("position is in range"));
                    prop_assert_eq!(got, want);
                }
                Op::Apply => {
                    let mut seen = Vec::new();
                    sut.apply(|&e| seen.push(e));
                    let want: Vec<i32> = model.iter().copied().collect();
                    prop_assert_eq!(seen, want);
                }
            }

            // Post-conditions after each op: count parity and identical
            // front-to-rear contents.
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            let contents: Vec<i32> = sut.iter().copied().collect();
            let expect: Vec<i32> = model.iter().copied().collect();
            prop_assert_eq!(contents, expect);
        }
    }
}

// Property: concat is exactly model concatenation — q1's order, then
// q2's order, with the summed count — and consumes the second queue.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_concat_is_model_concatenation(
        left in proptest::collection::vec(any::<i32>(), 0..40),
        right in proptest::collection::vec(any::<i32>(), 0..40),
    ) {
        let mut q1: Queue<i32> = Queue::new();
        let mut q2: Queue<i32> = Queue::new();
        for &v in &left {
            q1.put(v);
        }
        for &v in &right {
            q2.put(v);
        }

        q1.concat(q2);

        prop_assert_eq!(q1.len(), left.len() + right.len());
        let mut want = left.clone();
        want.extend_from_slice(&right);
        let mut drained = Vec::new();
        while let Some(v) = q1.get() {
            drained.push(v);
        }
        prop_assert_eq!(drained, want);
    }
}
