pub mod cli;
pub mod core;
pub mod fs;
pub mod models;

pub use crate::core::{WalkOptions, tree};
pub use crate::models::{Counters, Setting, Settings};
