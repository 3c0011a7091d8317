//! Core data structures under measurement

pub mod hash;
pub mod hash_table;
