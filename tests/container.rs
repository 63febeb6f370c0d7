use std::collections::{LinkedList, VecDeque};

use sort_lab_rs::container;
use sort_test_tools::patterns;

#[test]
fn sort_list_orders_front_to_back() {
    for len in [0, 1, 2, 100, 1_000] {
        let input = patterns::random_uniform(len, 0..=500);
        let mut expected = input.clone();
        expected.sort();

        let mut list: LinkedList<i32> = input.into_iter().collect();
        container::sort_list(&mut list);
        assert_eq!(list.into_iter().collect::<Vec<_>>(), expected);
    }
}

// Only the key participates in the ordering, the index tags input order.
#[derive(Debug, Clone, Copy)]
struct Keyed {
    key: i32,
    idx: usize,
}

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Keyed {}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

#[test]
fn sort_list_is_stable() {
    let mut list: LinkedList<Keyed> = [(5, 0), (3, 1), (8, 2), (3, 3), (1, 4)]
        .into_iter()
        .map(|(key, idx)| Keyed { key, idx })
        .collect();

    container::sort_list(&mut list);

    let order: Vec<(i32, usize)> = list.into_iter().map(|k| (k.key, k.idx)).collect();
    assert_eq!(order, [(1, 4), (3, 1), (3, 3), (5, 0), (8, 2)]);
}

#[test]
fn sort_queue_pops_ascending() {
    for len in [0, 1, 2, 100, 1_000] {
        let input = patterns::random_uniform(len, 0..=500);
        let mut expected = input.clone();
        expected.sort();

        let mut queue: VecDeque<i32> = input.into_iter().collect();
        container::sort_queue(&mut queue);

        let mut drained = Vec::with_capacity(len);
        while let Some(x) = queue.pop_front() {
            drained.push(x);
        }
        assert_eq!(drained, expected);
    }
}

#[test]
fn sort_stack_pops_ascending() {
    for len in [0, 1, 2, 100, 1_000] {
        let input = patterns::random_uniform(len, 0..=500);
        let mut expected = input.clone();
        expected.sort();

        let mut stack: Vec<i32> = input;
        container::sort_stack(&mut stack);

        let mut popped = Vec::with_capacity(len);
        while let Some(x) = stack.pop() {
            popped.push(x);
        }
        assert_eq!(popped, expected);
    }
}
