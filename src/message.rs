use lapin::message::Delivery;
use std::borrow::Cow;

/// A single message handed to the receiver by the broker.
///
/// The delivery tag is kept for log context only; the consumer runs with
/// automatic acknowledgement so it is never sent back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceivedMessage {
    pub delivery_tag: u64,
    pub body: Vec<u8>,
}

impl ReceivedMessage {
    pub fn new(delivery_tag: u64, body: impl Into<Vec<u8>>) -> Self {
        ReceivedMessage {
            delivery_tag,
            body: body.into(),
        }
    }

    /// The body decoded as UTF-8, with invalid sequences replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

impl From<Delivery> for ReceivedMessage {
    fn from(delivery: Delivery) -> Self {
        ReceivedMessage {
            delivery_tag: delivery.delivery_tag,
            body: delivery.data,
        }
    }
}
