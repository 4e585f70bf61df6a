use crate::build::BuildConfig;
use crate::constants::verbosity;
use clap::{ArgGroup, Parser};
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for `uniffi-build`.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "uniffi-build",
    author,
    version,
    about = "Generate Swift bindings for the cargo package and bundle it as an xcframework",
    long_about = None
)]
#[command(group(ArgGroup::new("profile").args(["debug", "release"])))]
pub struct BuildArgs {
    /// Build the cargo package in debug mode (default).
    #[arg(short, long)]
    pub debug: bool,

    /// Build the cargo package in release mode.
    #[arg(short, long)]
    pub release: bool,

    /// Build a universal library for every configured target.
    #[arg(short, long)]
    pub universal: bool,

    /// Start looking for `Package.swift` here instead of the working directory.
    #[arg(short = 'C', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl BuildArgs {
    pub fn build_config(&self) -> BuildConfig {
        BuildConfig { debug: !self.release, universal: self.universal }
    }
}

pub fn get_build_args() -> BuildArgs {
    BuildArgs::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

/// Whether anything follows the program name in `args`.
pub fn has_extra_args<I, T>(args: I) -> bool
where
    I: IntoIterator<Item = T>,
{
    args.into_iter().nth(1).is_some()
}
