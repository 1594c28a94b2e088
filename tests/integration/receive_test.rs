// These tests need a running RabbitMQ broker; run them with
// `cargo test -- --ignored`, pointing AMQP_ADDR at the broker if it is not
// on localhost with the default credentials.

use futures::StreamExt;
use hello_receiver::env::Config;
use hello_receiver::rabbitmq::consumer::drain;
use hello_receiver::rabbitmq::{topology, ConnectionManager, SetupStage};
use hello_receiver::receiver::Receiver;
use lapin::{options::BasicPublishOptions, BasicProperties, Channel};
use std::time::Duration;
use tokio::time::timeout;

use crate::common::broker_config;

async fn publisher(config: &Config) -> (ConnectionManager, Channel) {
    let mut manager = ConnectionManager::new(&config.amqp_addr, config.connect_timeout());
    manager.connect().await.expect("publisher connect");
    let channel = manager.open_channel().await.expect("publisher channel");
    topology::declare_queue(&channel, &config.queue)
        .await
        .expect("publisher queue declare");
    (manager, channel)
}

async fn publish(channel: &Channel, queue: &str, body: &str) {
    channel
        .basic_publish(
            "",
            queue,
            BasicPublishOptions::default(),
            body.as_bytes(),
            BasicProperties::default(),
        )
        .await
        .expect("basic_publish")
        .await
        .expect("publisher confirm");
}

async fn receive(receiver: Receiver, count: usize) -> Vec<String> {
    let (mut manager, _channel, consumer) = receiver.into_parts();

    let mut bodies = Vec::new();
    timeout(
        Duration::from_secs(10),
        drain(consumer.take(count), |m| bodies.push(m.text().into_owned())),
    )
    .await
    .expect("timed out waiting for deliveries");

    manager.close().await;
    bodies
}

#[tokio::test]
#[ignore]
async fn test_message_published_before_start_is_received() {
    let config = broker_config("hello");
    let (mut pub_manager, pub_channel) = publisher(&config).await;
    publish(&pub_channel, &config.queue, "Hello World!").await;

    let receiver = Receiver::setup(&config).await.expect("receiver setup");
    assert_eq!(receiver.queue(), config.queue);

    assert_eq!(receive(receiver, 1).await, vec!["Hello World!"]);
    pub_manager.close().await;
}

#[tokio::test]
#[ignore]
async fn test_messages_arrive_in_publish_order() {
    let config = broker_config("order");
    let (mut pub_manager, pub_channel) = publisher(&config).await;

    let receiver = Receiver::setup(&config).await.expect("receiver setup");
    publish(&pub_channel, &config.queue, "A").await;
    publish(&pub_channel, &config.queue, "B").await;

    assert_eq!(receive(receiver, 2).await, vec!["A", "B"]);
    pub_manager.close().await;
}

#[tokio::test]
#[ignore]
async fn test_restart_resumes_without_local_state() {
    let config = broker_config("restart");
    let (mut pub_manager, pub_channel) = publisher(&config).await;

    let first = Receiver::setup(&config).await.expect("first setup");
    publish(&pub_channel, &config.queue, "first").await;
    assert_eq!(receive(first, 1).await, vec!["first"]);

    let second = Receiver::setup(&config).await.expect("second setup");
    publish(&pub_channel, &config.queue, "second").await;
    assert_eq!(receive(second, 1).await, vec!["second"]);

    pub_manager.close().await;
}

#[tokio::test]
#[ignore]
async fn test_reserved_queue_name_fails_declaration() {
    let mut config = broker_config("refused");
    // The broker reserves the amq. prefix and answers ACCESS_REFUSED.
    config.queue = format!("amq.{}", config.queue);

    let err = match Receiver::setup(&config).await {
        Ok(_) => panic!("declaring {} succeeded", config.queue),
        Err(e) => e,
    };

    assert_eq!(err.stage(), SetupStage::DeclareQueue);
    assert!(err.to_string().starts_with("Failed to declare a queue"));
}
