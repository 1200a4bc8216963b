pub mod binary_search;
pub mod exponential_search;
pub mod interpolation_search;
pub mod jump_search;
pub mod linear_search;
pub mod ternary_search;
