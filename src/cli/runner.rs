use crate::{
    build::BuildPipeline,
    cli::BuildArgs,
    config::ToolConfig,
    error::Result,
    layout::ProjectLayout,
    manifest::find_repo_root,
    process::{CommandRunner, SystemRunner},
    prompt::{collect_options, SetupPrompter},
    scaffold::ScaffoldPipeline,
};
use std::path::{Path, PathBuf};

/// Finds the package root from `directory`, or from the working directory.
pub fn resolve_repo_root(directory: Option<&Path>) -> Result<PathBuf> {
    let start = match directory {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir()?,
    };
    let repo_root = find_repo_root(&start)?;
    log::debug!("Using repository root {}", repo_root.display());
    Ok(repo_root)
}

/// Entry point of `uniffi-build`.
pub fn run_build(args: &BuildArgs) -> Result<PathBuf> {
    run_build_with(&SystemRunner::new(), args)
}

pub fn run_build_with(runner: &dyn CommandRunner, args: &BuildArgs) -> Result<PathBuf> {
    let repo_root = resolve_repo_root(args.directory.as_deref())?;
    let config = ToolConfig::load(&repo_root)?;
    BuildPipeline::new(runner, &config, &repo_root, args.build_config()).run()
}

/// Entry point of `uniffi-setup`.
pub fn run_setup(prompter: &dyn SetupPrompter) -> Result<ProjectLayout> {
    run_setup_with(&SystemRunner::new(), prompter, None)
}

/// Collects the answers, then scaffolds the package found from `directory`.
pub fn run_setup_with(
    runner: &dyn CommandRunner,
    prompter: &dyn SetupPrompter,
    directory: Option<&Path>,
) -> Result<ProjectLayout> {
    let repo_root = resolve_repo_root(directory)?;
    let config = ToolConfig::load(&repo_root)?;
    let options = collect_options(prompter)?;
    ScaffoldPipeline::new(runner, &config, &repo_root).run(&options)
}
