pub mod bead_sort;
pub mod bogobogosort;
pub mod bogosort;
pub mod bozosort;
pub mod bubble_sort;
pub mod bucket_sort;
pub mod cocktail_sort;
pub mod comb_sort;
pub mod counting_sort;
pub mod gnome_sort;
pub mod insertion_sort;
pub mod is_sorted;
pub mod merge_sort;
pub mod odd_even_sort;
pub mod pigeonhole_sort;
pub mod proxmap_sort;
pub mod quick_sort;
pub mod radix_sort;
pub mod selection_sort;
pub mod slowsort;
pub mod stooge_sort;
pub mod worstsort;
