//! Native build pipeline: binding generation, cargo compilation, optional
//! universal merge and xcframework packaging.

pub mod bindings;
pub mod bundle;
pub mod universal;

use std::path::{Path, PathBuf};

use crate::config::ToolConfig;
use crate::constants::env;
use crate::error::Result;
use crate::ioutils::ensure_exists;
use crate::layout::{Profile, ProjectLayout};
use crate::manifest::PackageManifest;
use crate::process::{run_checked, CommandRunner, Invocation};
use crate::sdk;
use crate::tools::{require_all, Tool};

/// What to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildConfig {
    pub debug: bool,
    pub universal: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self { debug: true, universal: false }
    }
}

impl BuildConfig {
    pub fn profile(&self) -> Profile {
        if self.debug {
            Profile::Debug
        } else {
            Profile::Release
        }
    }

    /// Tools that must be on `PATH` before anything runs.
    pub fn required_tools(&self) -> Vec<Tool> {
        let mut tools = vec![Tool::SWIFT, Tool::CARGO, Tool::XCRUN];
        if self.universal {
            tools.extend([Tool::RUSTUP, Tool::LIPO]);
        }
        tools
    }
}

/// Orchestrates one build of the package rooted at `repo_root`.
pub struct BuildPipeline<'a> {
    runner: &'a dyn CommandRunner,
    config: &'a ToolConfig,
    repo_root: PathBuf,
    build: BuildConfig,
}

impl<'a> BuildPipeline<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        config: &'a ToolConfig,
        repo_root: impl AsRef<Path>,
        build: BuildConfig,
    ) -> Self {
        Self { runner, config, repo_root: repo_root.as_ref().to_path_buf(), build }
    }

    /// Runs every step in order and returns the path of the produced xcframework.
    pub fn run(&self) -> Result<PathBuf> {
        self.check_tools()?;

        let manifest = PackageManifest::dump(self.runner, &self.repo_root)?;
        let layout = ProjectLayout::new(&self.repo_root, &manifest.name);
        log::debug!("Resolved layout for {}: {layout:?}", layout.name);

        println!("Generating bindings for Cargo project {}...", layout.snake_name);
        bindings::generate(self.runner, &layout, &self.config.bindgen_bin)?;
        bindings::relocate(&layout)?;
        bindings::rewrite_symbol_prefixes(&layout)?;
        println!("Successfully generated bindings for Cargo project {}.", layout.snake_name);

        println!("Building Cargo project {}...", layout.snake_name);
        let library = self.compile(&layout)?;
        println!("Successfully built Cargo project {}.", layout.snake_name);

        println!("Creating xcframework...");
        bundle::create_xcframework(self.runner, &layout, &library)?;
        println!("Done.");

        Ok(layout.xcframework_path)
    }

    fn check_tools(&self) -> Result<()> {
        require_all(&self.build.required_tools(), |tool| self.runner.is_available(tool))?;
        if self.build.universal {
            universal::require_targets(self.runner, &self.config.universal_targets)?;
        }
        Ok(())
    }

    /// Builds the static library and returns the one to package.
    fn compile(&self, layout: &ProjectLayout) -> Result<PathBuf> {
        let profile = self.build.profile();

        run_checked(self.runner, &cargo_build(layout, profile), "Failed to build Cargo project")?;
        let host_library = layout.static_lib_path(profile, None);
        ensure_exists(&host_library)?;

        if !self.build.universal {
            return Ok(host_library);
        }

        let sdk = sdk::latest_sdk(self.runner, &self.config.sdk_platform)?;
        let deployment_target =
            self.config.deployment_target.clone().unwrap_or_else(|| sdk.platform_version.clone());

        let mut libraries = Vec::with_capacity(self.config.universal_targets.len());
        for target in &self.config.universal_targets {
            println!("Building Cargo project {} for {target}...", layout.snake_name);
            let invocation = cargo_build(layout, profile)
                .args(["--target", target.as_str()])
                .env(env::SDKROOT, &sdk.sdk_path)
                .env(env::DEPLOYMENT_TARGET, &deployment_target);
            run_checked(
                self.runner,
                &invocation,
                &format!("Failed to build Cargo project for {target}"),
            )?;

            let library = layout.static_lib_path(profile, Some(target));
            ensure_exists(&library)?;
            libraries.push(library);
        }

        universal::merge(self.runner, layout, profile, &libraries)
    }
}

/// `cargo build [--release]` in the cargo package.
fn cargo_build(layout: &ProjectLayout, profile: Profile) -> Invocation {
    let invocation = Invocation::new("cargo").arg("build").current_dir(&layout.cargo_dir);
    match profile {
        Profile::Debug => invocation,
        Profile::Release => invocation.arg("--release"),
    }
}
