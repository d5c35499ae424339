// src/application/commands/subscribers/mod.rs
mod service;
mod subscribe;

pub use service::SubscriberCommandService;
pub use subscribe::SubscribeCommand;
