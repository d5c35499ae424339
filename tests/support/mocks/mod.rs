// tests/support/mocks/mod.rs
pub mod repos;
pub mod time;

pub use repos::*;
pub use time::*;
