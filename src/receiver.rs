use lapin::{Channel, Consumer};
use tokio::task::JoinHandle;
use tracing::info;

use crate::env::Config;
use crate::rabbitmq::{consumer, topology, ConnectionManager, Result};
use crate::shutdown::{self, Termination};

/// A connected receiver whose consumer is registered but not yet drained.
pub struct Receiver {
    manager: ConnectionManager,
    channel: Channel,
    consumer: Consumer,
    queue: String,
}

impl Receiver {
    /// Connects, opens a channel, declares the queue and registers the consumer.
    /// The first failing step is returned; nothing is retried.
    pub async fn setup(config: &Config) -> Result<Self> {
        let mut manager = ConnectionManager::new(&config.amqp_addr, config.connect_timeout());
        manager.connect().await?;

        let channel = manager.open_channel().await?;
        topology::declare_queue(&channel, &config.queue).await?;
        let consumer =
            topology::register_consumer(&channel, &config.queue, &config.consumer_tag).await?;

        Ok(Receiver {
            manager,
            channel,
            consumer,
            queue: config.queue.clone(),
        })
    }

    pub fn queue(&self) -> &str {
        &self.queue
    }

    /// Splits the receiver into its connection, channel and delivery stream.
    /// The channel must be kept alive for as long as the stream is read.
    pub fn into_parts(self) -> (ConnectionManager, Channel, Consumer) {
        (self.manager, self.channel, self.consumer)
    }

    /// Logs every delivery until the termination signal arrives.
    pub async fn run(self) -> std::io::Result<Termination> {
        let (mut manager, _channel, consumer) = self.into_parts();

        let worker = spawn_worker(consumer);

        info!(" [*] Waiting for messages. To exit press CTRL+C");
        let signal = shutdown::wait_for_termination().await;

        worker.abort();
        manager.close().await;
        signal
    }
}

/// Spawns the task that drains `deliveries` into the log.
pub fn spawn_worker(deliveries: Consumer) -> JoinHandle<u64> {
    tokio::spawn(async move { consumer::drain(deliveries, consumer::log_message).await })
}
