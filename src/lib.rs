//! Word frequency counting over byte streams. A fixed-capacity
//! open-addressing table keyed by lowercased alphabetic tokens, with a
//! single-pass selector for the most frequent entries.

pub mod config;
pub mod count;
pub mod error;
pub mod input;
pub mod report;
pub mod tokenize;
