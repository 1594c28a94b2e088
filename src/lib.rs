pub mod config;
pub mod env;
pub mod message;
pub mod rabbitmq;
pub mod receiver;
pub mod shutdown;
