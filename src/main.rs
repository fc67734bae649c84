mod args;
mod dlaw;

use clap::Parser;
use log::{warn, LevelFilter};
use std::error::Error;

fn main() {
    let args = args::Args::parse();

    // RUST_LOG, when set, takes precedence over --verbose.
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let res = dlaw::run(&args);
    if let Err(e) = res {
        warn!("Error occured {:?}", e);
        eprintln!("An error occured: {}", e);
        let mut cause = e.source();
        while let Some(c) = cause {
            eprintln!("  caused by: {}", c);
            cause = c.source();
        }
        std::process::exit(1);
    }
}
