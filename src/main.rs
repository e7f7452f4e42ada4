use alfresco_app_generator::logger::init_logger;
use alfresco_app_generator::Config;
use clap::Parser;
use std::path::PathBuf;
use std::{env, process};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Working directory, defaults to the current one
    #[arg(short = 'd', long)]
    working_dir: Option<PathBuf>,

    /// Do not install npm dependencies
    #[arg(long)]
    skip_install: bool,

    /// Do not look up the GitHub account online
    #[arg(long)]
    offline: bool,

    /// File remembering author details between runs
    #[arg(long)]
    identity_file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    let working_dir = match args.working_dir {
        Some(dir) => dir,
        None => env::current_dir().unwrap_or_else(|err| {
            log::error!("Cannot read the current directory: {}", err);
            process::exit(1);
        }),
    };

    let config = Config {
        working_dir,
        skip_install: args.skip_install,
        offline: args.offline,
        identity_file: args.identity_file,
    };

    if let Err(err) = alfresco_app_generator::run(&config) {
        log::error!("{:#}", err);
        process::exit(1);
    }
}
