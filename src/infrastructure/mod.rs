// src/infrastructure/mod.rs
pub mod sanity;
pub mod time;
