use clap::Parser;
use tracing_subscriber::{FmtSubscriber, EnvFilter};

mod error;
mod auth;
mod input;
mod transfer;
mod cli;

const DEBUG_FILTER: &str = "orghooks=debug,orghooks_api=debug,orghooks_lib=debug";

fn env_filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new(DEBUG_FILTER)
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

fn main() {
    let args = cli::Cli::parse();

    FmtSubscriber::builder()
        .with_env_filter(env_filter(args.debug()))
        .with_writer(std::io::stderr)
        .try_init()
        .expect("failed to initialize global tracing subscriber");

    if let Err(err) = cli::handle(args) {
        eprintln!("{}", err);

        std::process::exit(1);
    }
}
