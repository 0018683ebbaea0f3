use proptest_derive::Arbitrary;

use super::*;
use proptest::prelude::*;
use std::collections::VecDeque;

// simple enum to allow pushes and pops in any order
#[derive(Debug, Clone, Copy, Arbitrary)]
enum DequeOps<T> {
    PushFront(T),
    PopFront,
    PushBack(T),
    PopBack,
}

// applies `op` to both the deque and the model, returning what each popped
fn apply<T: Clone>(
    deque: &mut RingDeque<T>,
    model: &mut VecDeque<T>,
    op: &DequeOps<T>,
) -> (Option<T>, Option<T>) {
    match op {
        DequeOps::PushFront(item) => {
            deque.push_front(item.clone());
            model.push_front(item.clone());
            (None, None)
        }
        DequeOps::PopFront => (deque.pop_front(), model.pop_front()),
        DequeOps::PushBack(item) => {
            deque.push_back(item.clone());
            model.push_back(item.clone());
            (None, None)
        }
        DequeOps::PopBack => (deque.pop_back(), model.pop_back()),
    }
}

proptest! {
    // Test that pushing i32s to the front and back maintains the correct order
    #[test]
    fn test_push_front_back_ops(ref ops in proptest::collection::vec(any::<DequeOps<i32>>(), 0..200)) {
        let mut deque = RingDeque::new();
        let mut model = VecDeque::new();
        for op in ops.iter() {
            let (got, expected) = apply(&mut deque, &mut model, op);
            prop_assert_eq!(got, expected);
            prop_assert_eq!(deque.len(), model.len());
            prop_assert!(deque.len() < deque.capacity());
            prop_assert!(deque.capacity().is_power_of_two());
        }
        prop_assert_eq!(deque.to_vec(), Vec::from(model));
    }

    // Same, with owned heap values so moves out of the buffer get exercised
    #[test]
    fn test_push_front_back_ops_string(ref ops in proptest::collection::vec(any::<DequeOps<String>>(), 0..200)) {
        let mut deque = RingDeque::new();
        let mut model = VecDeque::new();
        for op in ops.iter() {
            let (got, expected) = apply(&mut deque, &mut model, op);
            prop_assert_eq!(got, expected);
        }
        prop_assert_eq!(deque.to_vec(), Vec::from(model));
    }

    // get(i) agrees with the ordered snapshot in every reachable state
    #[test]
    fn test_get_matches_to_vec(ref ops in proptest::collection::vec(any::<DequeOps<u8>>(), 0..200)) {
        let mut deque = RingDeque::new();
        let mut model = VecDeque::new();
        for op in ops.iter() {
            apply(&mut deque, &mut model, op);
            let snapshot = deque.to_vec();
            for (i, value) in snapshot.iter().enumerate() {
                prop_assert_eq!(deque.get(i), Some(value));
            }
            prop_assert_eq!(deque.get(snapshot.len()), None);
            prop_assert_eq!(deque.front(), snapshot.first());
            prop_assert_eq!(deque.back(), snapshot.last());
        }
    }

    // values come out of the front in the order they went in at the back
    #[test]
    fn test_queue_law(ref items in proptest::collection::vec(any::<i64>(), 0..300)) {
        let mut deque = RingDeque::new();
        for &item in items.iter() {
            deque.push_back(item);
        }
        let mut drained = Vec::new();
        while let Some(item) = deque.pop_front() {
            drained.push(item);
        }
        prop_assert_eq!(&drained, items);
    }

    // pushing and popping at the front behaves like a stack
    #[test]
    fn test_stack_at_front_law(ref items in proptest::collection::vec(any::<i64>(), 0..300)) {
        let mut deque = RingDeque::new();
        for &item in items.iter() {
            deque.push_front(item);
        }
        let mut drained = Vec::new();
        while let Some(item) = deque.pop_front() {
            drained.push(item);
        }
        let mut reversed = items.clone();
        reversed.reverse();
        prop_assert_eq!(drained, reversed);
    }

    // the push that triggers a grow leaves every earlier element where it was
    #[test]
    fn test_grow_preserves_order(offset in 0usize..16, ref items in proptest::collection::vec(any::<u16>(), 15)) {
        let mut deque = RingDeque::new();
        for _ in 0..offset {
            deque.push_back(0);
            deque.pop_front();
        }
        for &item in items.iter() {
            deque.push_back(item);
        }
        prop_assert_eq!(deque.capacity(), 16);
        let before = deque.to_vec();
        deque.push_back(u16::MAX);
        prop_assert_eq!(deque.capacity(), 32);
        let after = deque.to_vec();
        prop_assert_eq!(&after[..before.len()], &before[..]);
    }

    #[test]
    fn test_round_trip(ref items in proptest::collection::vec(any::<i32>(), 0..1100)) {
        let deque = RingDeque::from(items.clone());
        prop_assert_eq!(deque.len(), items.len());
        prop_assert_eq!(&deque.to_vec(), items);
        prop_assert_eq!(deque.into_iter().collect::<Vec<_>>(), items.clone());
    }
}
