// src/rabbitmq/mod.rs
// Broker-facing pieces of the receiver

pub mod errors;
pub mod connection;
pub mod consumer;
pub mod topology;

pub use connection::ConnectionManager;
pub use errors::{Result, SetupError, SetupStage};
