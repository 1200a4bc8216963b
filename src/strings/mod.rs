pub mod is_pangram;
