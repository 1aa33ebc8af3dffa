mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod render;
mod store;
mod timer;
mod utils;

use clap::Parser;
use log::LevelFilter;

use cli::Cli;
use config::Config;

fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);

    init_logging(cli.debug);
    if let Some(path) = &config.source {
        log::debug!("Loaded config from {}", path.display());
    }

    if let Err(e) = app::run(&cli, config.data_dir.as_deref()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
