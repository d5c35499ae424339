pub mod commands;
pub mod error;
pub mod pages;
pub mod ports;
pub mod queries;
pub mod render;
pub mod services;

pub use error::ApplicationResult;
