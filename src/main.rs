//! Wall-clock benchmark harness: generates one random data set per element
//! type and size, deep-copies it for every algorithm, times each run and
//! reports one line per (algorithm, size) pair.

use std::collections::{LinkedList, VecDeque};
use std::env;
use std::ops::RangeInclusive;
use std::time::Instant;

use once_cell::sync::Lazy;
use sort_lab_rs::{container, heap, stable, unstable};
use sort_test_tools::patterns;
use sort_test_tools::Sort;

struct Config {
    sizes: Vec<usize>,
    threshold: usize,
    value_range: RangeInclusive<i32>,
}

static CONFIG: Lazy<Config> = Lazy::new(|| {
    // Sizes come from argv, everything else from the environment. Bad
    // values abort, there is nothing sensible to recover to.
    let sizes: Vec<usize> = env::args()
        .skip(1)
        .map(|arg| arg.parse().expect("sizes must be positive integers"))
        .collect();

    let threshold = env::var("HYBRID_THRESHOLD")
        .ok()
        .map(|val| val.parse().expect("HYBRID_THRESHOLD must be an integer >= 1"))
        .unwrap_or(stable::hybrid_mergesort::DEFAULT_THRESHOLD);
    assert!(threshold >= 1, "HYBRID_THRESHOLD must be >= 1");

    Config {
        sizes: if sizes.is_empty() {
            vec![100, 1_000, 10_000]
        } else {
            sizes
        },
        threshold,
        value_range: 1..=1000,
    }
});

/// Times a single call of `f`, returning its result and the elapsed
/// wall-clock seconds.
fn measure<R>(f: impl FnOnce() -> R) -> (R, f64) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed().as_secs_f64())
}

fn is_sorted<T: Ord>(v: &[T]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}

fn run_sort<S: Sort, T: Ord + Clone>(data: &[T]) {
    let mut copy = data.to_vec();
    let (_, secs) = measure(|| S::sort(&mut copy));
    assert!(is_sorted(&copy), "{} produced unsorted output", S::name());
    println!("{} took {:.6} seconds", S::name(), secs);
}

fn run_sort_battery<T: Ord + Clone>(data: &[T]) {
    run_sort::<unstable::selection_sort::SortImpl, T>(data);
    run_sort::<unstable::bubble_sort::SortImpl, T>(data);
    run_sort::<stable::insertion_sort::SortImpl, T>(data);
    run_sort::<stable::binary_insertion_sort::SortImpl, T>(data);
    run_sort::<unstable::quicksort::SortImpl, T>(data);
    run_sort::<unstable::hybrid_quicksort::SortImpl, T>(data);
    run_sort::<stable::mergesort::SortImpl, T>(data);
    run_sort::<stable::hybrid_mergesort::SortImpl, T>(data);
}

/// The `f64` battery goes through `sort_by`, floats are not `Ord`.
fn run_f64_sort<S: Sort>(data: &[f64]) {
    let mut copy = data.to_vec();
    let (_, secs) = measure(|| S::sort_by(&mut copy, |a, b| a.total_cmp(b)));
    assert!(
        copy.windows(2).all(|w| w[0] <= w[1]),
        "{} produced unsorted output",
        S::name()
    );
    println!("{} took {:.6} seconds", S::name(), secs);
}

fn run_f64_battery(data: &[f64]) {
    run_f64_sort::<unstable::selection_sort::SortImpl>(data);
    run_f64_sort::<unstable::bubble_sort::SortImpl>(data);
    run_f64_sort::<stable::insertion_sort::SortImpl>(data);
    run_f64_sort::<stable::binary_insertion_sort::SortImpl>(data);
    run_f64_sort::<unstable::quicksort::SortImpl>(data);
    run_f64_sort::<unstable::hybrid_quicksort::SortImpl>(data);
    run_f64_sort::<stable::mergesort::SortImpl>(data);
    run_f64_sort::<stable::hybrid_mergesort::SortImpl>(data);
}

/// The hybrid sorts once more, with the configured threshold instead of
/// their default.
fn run_hybrids_with_threshold(data: &[i32], threshold: usize) {
    let mut copy = data.to_vec();
    let (_, secs) = measure(|| {
        stable::hybrid_mergesort::sort_with_threshold(&mut copy, threshold)
    });
    assert!(is_sorted(&copy));
    println!("hybrid_mergesort (threshold {}) took {:.6} seconds", threshold, secs);

    let mut copy = data.to_vec();
    let (_, secs) = measure(|| {
        unstable::hybrid_quicksort::sort_with_threshold(&mut copy, threshold)
    });
    assert!(is_sorted(&copy));
    println!("hybrid_quicksort (threshold {}) took {:.6} seconds", threshold, secs);
}

fn run_container_sorts(data: &[i32]) {
    let mut list: LinkedList<i32> = data.iter().copied().collect();
    let (_, secs) = measure(|| container::sort_list(&mut list));
    assert!(list.iter().zip(list.iter().skip(1)).all(|(a, b)| a <= b));
    println!("linked_list sort took {:.6} seconds", secs);

    let mut queue: VecDeque<i32> = data.iter().copied().collect();
    let (_, secs) = measure(|| container::sort_queue(&mut queue));
    assert!(queue.iter().zip(queue.iter().skip(1)).all(|(a, b)| a <= b));
    println!("queue sort took {:.6} seconds", secs);

    let mut stack: Vec<i32> = data.to_vec();
    let (_, secs) = measure(|| container::sort_stack(&mut stack));
    assert!(stack.windows(2).all(|w| w[0] >= w[1]));
    println!("stack sort took {:.6} seconds", secs);
}

fn run_find_max(data: &[i32]) {
    let mut copy = data.to_vec();
    let (max, secs) = measure(|| heap::find_max(&mut copy).copied());
    assert_eq!(max, data.iter().max().copied());
    if let Some(max) = max {
        println!("heap find_max took {:.6} seconds, maximum value: {}", secs, max);
    }
}

fn main() {
    let config = &*CONFIG;
    println!("seed: {}", patterns::random_init_seed());

    let float_min = *config.value_range.start() as f64;
    let float_max = *config.value_range.end() as f64;

    for &size in &config.sizes {
        println!("\nArray size: {}", size);

        println!("\nTesting with integers:");
        let ints = patterns::random_uniform(size, config.value_range.clone());
        run_sort_battery(&ints);
        run_hybrids_with_threshold(&ints, config.threshold);

        println!("\nTesting with floating-point numbers:");
        let floats = patterns::random_f64_uniform(size, float_min, float_max);
        run_f64_battery(&floats);

        println!("\nTesting with strings:");
        let strings = patterns::random_str(size);
        run_sort_battery(&strings);

        println!("\nTesting with containers:");
        run_container_sorts(&ints);

        run_find_max(&ints);
    }
}
