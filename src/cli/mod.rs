pub mod args;
pub mod runner;

pub use args::{get_build_args, get_log_level_from_verbose, has_extra_args, BuildArgs};
pub use runner::{resolve_repo_root, run_build, run_build_with, run_setup, run_setup_with};
