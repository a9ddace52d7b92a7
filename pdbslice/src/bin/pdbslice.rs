use clap::Parser;
use env_logger::Builder;
use log::{error, LevelFilter};
use pdbslice::application::{run, Cli};
use pdbslice::source::RemoteSource;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
    } else {
        let mut verbosity_level = LevelFilter::Info;
        if cli.verbose {
            verbosity_level = LevelFilter::Debug
        };
        if cli.trace {
            verbosity_level = LevelFilter::Trace
        };

        let mut builder = Builder::new();
        builder
            .filter_module("pdbslice", verbosity_level)
            .format_target(false)
            .init();
    }

    let source = RemoteSource::new(cli.remote_url.clone());
    let Err(error) = run(&cli, &source) else {
        return ExitCode::SUCCESS;
    };

    error!("{error}");
    ExitCode::FAILURE
}
