pub mod comments;
pub mod find;
pub mod input;
pub mod stats;
pub mod tokens;
pub mod tree;

#[cfg(test)]
mod find_tests;
#[cfg(test)]
mod input_tests;
