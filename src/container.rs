//! Sorting for containers that are not randomly indexable. Each variant
//! drains into a contiguous buffer, sorts that, and refills, costing O(n)
//! on top of the chosen sort.

use std::collections::{LinkedList, VecDeque};
use std::mem;

use crate::stable::{hybrid_mergesort, mergesort};
use crate::unstable::hybrid_quicksort;

/// Sorts a linked list into ascending order, front to back.
///
/// Rust's `LinkedList` has no intrinsic sort, so the list is drained into a
/// buffer and rebuilt. The buffer is merge sorted, which keeps the whole
/// operation stable like the intrinsic sort of other standard libraries.
pub fn sort_list<T>(list: &mut LinkedList<T>)
where
    T: Ord,
{
    let mut buf: Vec<T> = mem::take(list).into_iter().collect();
    mergesort::sort(&mut buf);
    list.extend(buf);
}

/// Sorts a queue so that successive pops from the front yield ascending
/// order.
pub fn sort_queue<T>(queue: &mut VecDeque<T>)
where
    T: Ord,
{
    let mut buf: Vec<T> = queue.drain(..).collect();
    hybrid_mergesort::sort(&mut buf);
    queue.extend(buf);
}

/// Sorts a stack so that successive pops yield ascending order, i.e. the
/// minimum ends up on top.
pub fn sort_stack<T>(stack: &mut Vec<T>)
where
    T: Ord,
{
    let mut buf = Vec::with_capacity(stack.len());
    while let Some(x) = stack.pop() {
        buf.push(x);
    }

    hybrid_quicksort::sort(&mut buf);

    // Refill largest first so the stack pops smallest first.
    while let Some(x) = buf.pop() {
        stack.push(x);
    }
}
