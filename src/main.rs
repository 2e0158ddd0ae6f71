use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod http_probe;
pub mod report;
#[cfg(test)]
mod test_server;

use cli::Opts;
use config::load_config;
use dispatch::Dispatcher;
use http_probe::prelude::*;
use report::Output;

/// Exit code for a configuration that cannot be found or parsed.
const CONFIG_ERROR_EXIT: u8 = 99;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opts = Opts::parse();

    let config = match load_config(&opts.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(CONFIG_ERROR_EXIT);
        }
    };

    let client = match build_client(&opts.client_options()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", http_probe::report(&e));
            return ExitCode::FAILURE;
        }
    };

    log::info!("Probing {} site/method pair(s)", config.task_count());
    let dispatcher = Dispatcher::new(client, opts.display_mode(), Arc::new(Output::stdio()))
        .with_concurrency(opts.concurrency);
    dispatcher.run(&config.sites, &config.methods).await;

    ExitCode::SUCCESS
}
