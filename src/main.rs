use hello_receiver::config;
use hello_receiver::env::Config;
use hello_receiver::rabbitmq::connection::mask_password;
use hello_receiver::receiver::Receiver;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let mut args = std::env::args().skip(1);
    if let Some(arg) = args.next() {
        return match (arg.as_str(), args.next()) {
            ("--write-default-config", Some(path)) => {
                match config::write_config_file(&PathBuf::from(path), &Config::defaults_file()) {
                    Ok(()) => ExitCode::SUCCESS,
                    Err(e) => {
                        error!("{:#}", e);
                        ExitCode::FAILURE
                    }
                }
            }
            _ => {
                error!("usage: hello-receiver [--write-default-config <path>]");
                ExitCode::FAILURE
            }
        };
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        broker = %mask_password(&config.amqp_addr),
        queue = %config.queue,
        consumer_tag = %config.consumer_tag,
        "Starting receiver"
    );

    let receiver = match Receiver::setup(&config).await {
        Ok(receiver) => receiver,
        Err(e) => {
            error!(stage = ?e.stage(), "{}", e);
            return ExitCode::FAILURE;
        }
    };

    match receiver.run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to listen for termination signals: {}", e);
            ExitCode::FAILURE
        }
    }
}
