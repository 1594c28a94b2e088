use lapin::{
    options::{BasicConsumeOptions, QueueDeclareOptions},
    types::FieldTable,
    Channel, Consumer, Queue,
};
use tracing::info;

use super::errors::{Result, SetupError};

/// Plain, non-durable queue that outlives its consumers and is shared between connections.
pub fn queue_declare_options() -> QueueDeclareOptions {
    QueueDeclareOptions {
        passive: false,
        durable: false,
        exclusive: false,
        auto_delete: false,
        nowait: false,
    }
}

/// Automatic acknowledgement: the broker considers a message handled once it is delivered.
pub fn consume_options() -> BasicConsumeOptions {
    BasicConsumeOptions {
        no_local: false,
        no_ack: true,
        exclusive: false,
        nowait: false,
    }
}

/// Declares `queue`, creating it if absent.
pub async fn declare_queue(channel: &Channel, queue: &str) -> Result<Queue> {
    let declared = channel
        .queue_declare(queue, queue_declare_options(), FieldTable::default())
        .await
        .map_err(|source| SetupError::DeclareQueue {
            queue: queue.to_string(),
            source,
        })?;

    info!(
        "Queue '{}' declared with {} messages and {} consumers",
        declared.name(),
        declared.message_count(),
        declared.consumer_count()
    );
    Ok(declared)
}

pub async fn register_consumer(channel: &Channel, queue: &str, consumer_tag: &str) -> Result<Consumer> {
    let consumer = channel
        .basic_consume(queue, consumer_tag, consume_options(), FieldTable::default())
        .await
        .map_err(|source| SetupError::RegisterConsumer {
            queue: queue.to_string(),
            source,
        })?;

    info!(consumer_tag = %consumer.tag(), "Registered consumer on queue '{}'", queue);
    Ok(consumer)
}
