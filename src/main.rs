#![deny(
    unused_import_braces,
    unused_lifetimes,
    unreachable_pub,
    trivial_numeric_casts,
    missing_debug_implementations,
    missing_copy_implementations,
    deprecated_in_future,
    meta_variable_misuse,
    non_ascii_idents,
    rust_2018_compatibility,
    rust_2018_idioms,
    future_incompatible,
    nonstandard_style,
    clippy::all
)]
#![warn(variant_size_differences, let_underscore_drop)]

//! # owstats

pub mod cli_options;
pub mod commands;
pub mod config;
pub mod logger;
pub mod setup;
pub mod util;

use crate::{
    cli_options::{
        CliOptions,
        SubCommand,
    },
    config::Config,
};
use anyhow::Context as _;
use std::time::Instant;
use tokio::runtime::Builder as RuntimeBuilder;
use tracing::{
    error,
    info,
};
use tracing_appender::non_blocking::WorkerGuard;

/// Data from the setup function
struct SetupData {
    tokio_rt: tokio::runtime::Runtime,
    config: Config,
    worker_guard: Option<WorkerGuard>,
}

/// Pre-main setup
fn setup(cli_options: &CliOptions) -> anyhow::Result<SetupData> {
    let tokio_rt = RuntimeBuilder::new_multi_thread()
        .enable_all()
        .thread_name("owstats-tokio-worker")
        .build()
        .context("failed to start tokio runtime")?;

    let config = setup::load_config(&cli_options.config).context("failed to load config")?;

    let worker_guard = logger::setup(&config).context("failed to initialize logger")?;

    Ok(SetupData {
        tokio_rt,
        config,
        worker_guard,
    })
}

/// The main entry.
///
/// Sets up the program and calls `real_main`.
/// Setup errors are printed to the stderr, as the loggers are not initialized yet.
fn main() -> anyhow::Result<()> {
    // This line MUST run first.
    // It is needed to exit early if the options are invalid,
    // and this will NOT run destructors if it does so.
    let cli_options: CliOptions = argh::from_env();

    let setup_data = setup(&cli_options)?;
    real_main(setup_data, cli_options.subcommand)
}

/// The actual entry point
fn real_main(setup_data: SetupData, subcommand: SubCommand) -> anyhow::Result<()> {
    let start = Instant::now();
    let ret = setup_data
        .tokio_rt
        .block_on(async_main(&setup_data.config, subcommand));

    match ret.as_ref() {
        Ok(()) => info!("done in {:?}", start.elapsed()),
        Err(error) => error!("{error:?}"),
    }

    // Logging no longer reliable past this point
    drop(setup_data.worker_guard);

    ret
}

/// The async entry
async fn async_main(config: &Config, subcommand: SubCommand) -> anyhow::Result<()> {
    let client = config.build_client()?;

    match subcommand {
        SubCommand::Profile(options) => commands::profile::exec(&client, config, options).await,
        SubCommand::Search(options) => commands::search::exec(&client, options).await,
    }
}
