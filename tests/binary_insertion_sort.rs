use sort_test_tools::instantiate_stable_sort_tests;

type TestSort = sort_lab_rs::stable::binary_insertion_sort::SortImpl;

instantiate_stable_sort_tests!(TestSort);
