use futures::{Stream, StreamExt};
use std::fmt::Display;
use tracing::{debug, error, info, warn};

use crate::message::ReceivedMessage;

/// Writes one log line per received message.
pub fn log_message(message: &ReceivedMessage) {
    debug!(delivery_tag = message.delivery_tag, bytes = message.body.len(), "delivery");
    info!("Received a message: {}", message.text());
}

/// Drains `deliveries` in the order they arrive, passing each message to `handle`.
///
/// Stream errors are logged and skipped; the loop only ends when the stream
/// does. Returns the number of messages handled.
pub async fn drain<S, D, E, F>(mut deliveries: S, mut handle: F) -> u64
where
    S: Stream<Item = Result<D, E>> + Unpin,
    D: Into<ReceivedMessage>,
    E: Display,
    F: FnMut(&ReceivedMessage),
{
    let mut received = 0;

    while let Some(delivery) = deliveries.next().await {
        match delivery {
            Ok(delivery) => {
                let message = delivery.into();
                handle(&message);
                received += 1;
            }
            Err(e) => error!("Error receiving message: {}", e),
        }
    }

    warn!("Delivery stream closed after {} messages", received);
    received
}
