// src/presentation/http/middleware/mod.rs
pub mod cache;
pub mod redirects;
