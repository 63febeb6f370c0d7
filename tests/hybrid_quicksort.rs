use sort_test_tools::instantiate_sort_tests;

type TestSort = sort_lab_rs::unstable::hybrid_quicksort::SortImpl;

instantiate_sort_tests!(TestSort);
