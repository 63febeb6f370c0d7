//! Classic comparison-based sorting algorithms and a max-heap maximum
//! finder, written as a benchmarking testbed. Every algorithm works on any
//! totally ordered element type and uses nothing but comparisons and moves.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl {}

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod container;
pub mod heap;
pub mod stable;
pub mod unstable;
