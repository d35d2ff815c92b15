//! Password generation.

pub mod charset;
pub mod entropy;
mod generate;

pub use charset::{CharClass, ClassSet};
pub use generate::{Password, generate, generate_flags, generate_with};
