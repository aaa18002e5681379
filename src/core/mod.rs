// src/core/mod.rs

pub mod alphabet;
pub mod engine;
pub mod frequency;
pub mod grouping;
pub mod history;
pub mod types;
