mod config;
mod db;
mod errors;
mod handlers;
mod job;
mod models;
mod utils;

use dotenv::dotenv;
use log::error;
use std::env;
use std::process::ExitCode;

use crate::config::Config;
use crate::handlers::notification::MockWebhookSink;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv().ok();

    let config = match Config::from_env().and_then(|c| c.with_date_arg(env::args().nth(1))) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .format_timestamp_secs()
        .init();

    match job::run_job(&config, &MockWebhookSink).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Birthday job failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
