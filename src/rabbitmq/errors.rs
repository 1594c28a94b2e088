// src/rabbitmq/errors.rs

use lapin::Error as LapinError;
use std::time::Duration;
use thiserror::Error;

/// The step of receiver setup that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStage {
    Connect,
    OpenChannel,
    DeclareQueue,
    RegisterConsumer,
}

impl SetupStage {
    pub fn label(&self) -> &'static str {
        match self {
            SetupStage::Connect => "Failed to connect to RabbitMQ",
            SetupStage::OpenChannel => "Failed to open a channel",
            SetupStage::DeclareQueue => "Failed to declare a queue",
            SetupStage::RegisterConsumer => "Failed to register a consumer",
        }
    }
}

/// Any failure while bringing the receiver up. Every variant is fatal.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("{label}: {0}", label = SetupStage::Connect.label())]
    Connect(#[source] LapinError),

    #[error("{label}: timed out after {0:?}", label = SetupStage::Connect.label())]
    ConnectTimeout(Duration),

    #[error("{label}: {0}", label = SetupStage::OpenChannel.label())]
    OpenChannel(#[source] LapinError),

    #[error("{label} `{queue}`: {source}", label = SetupStage::DeclareQueue.label())]
    DeclareQueue {
        queue: String,
        #[source]
        source: LapinError,
    },

    #[error("{label} on `{queue}`: {source}", label = SetupStage::RegisterConsumer.label())]
    RegisterConsumer {
        queue: String,
        #[source]
        source: LapinError,
    },
}

impl SetupError {
    pub fn stage(&self) -> SetupStage {
        match self {
            SetupError::Connect(_) | SetupError::ConnectTimeout(_) => SetupStage::Connect,
            SetupError::OpenChannel(_) => SetupStage::OpenChannel,
            SetupError::DeclareQueue { .. } => SetupStage::DeclareQueue,
            SetupError::RegisterConsumer { .. } => SetupStage::RegisterConsumer,
        }
    }
}

pub type Result<T> = std::result::Result<T, SetupError>;
