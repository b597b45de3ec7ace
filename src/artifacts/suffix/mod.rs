//! Suffix array construction
//!
//! - `suffix_array`: DC3 suffix array, Kasai LCP array and the sorted
//!   significant LCP values used to drive anchor discovery

pub mod suffix_array;
