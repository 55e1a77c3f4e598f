// src/utils/mod.rs

pub mod error;
pub mod logger;
pub mod path;
