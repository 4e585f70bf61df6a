//! Scaffold pipeline: turns the checked-in placeholder package into a
//! user-named library, executable or SwiftUI app.
//!
//! - `rename`: Placeholder paths to project paths, computed before any mutation
//! - `sources`: Token substitution and kind-specific Swift sources
//! - `vcs`: Git repository re-initialisation

pub mod rename;
pub mod sources;
pub mod vcs;

use serde::Serialize;
use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::config::ToolConfig;
use crate::constants::PLACEHOLDER_NAME;
use crate::error::{Error, Result};
use crate::ioutils::write_file;
use crate::layout::ProjectLayout;
use crate::manifest::PackageManifest;
use crate::process::{run_checked, CommandRunner, Invocation};
use crate::renderer::{get_template_engine, TemplateRenderer};
use crate::template::{add_embedded_templates, embedded, TemplateContext, TokenMap};
use crate::tools::{require_all, Tool};

/// What the main module of the scaffolded package becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectKind {
    Library,
    Executable,
    GuiApp,
}

impl ProjectKind {
    pub const ALL: [ProjectKind; 3] =
        [ProjectKind::Library, ProjectKind::Executable, ProjectKind::GuiApp];

    /// Maps the 1-based menu choice to a kind.
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(ProjectKind::Library),
            2 => Some(ProjectKind::Executable),
            3 => Some(ProjectKind::GuiApp),
            _ => None,
        }
    }

    pub fn is_executable(self) -> bool {
        !matches!(self, ProjectKind::Library)
    }
}

impl Display for ProjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProjectKind::Library => "Library",
            ProjectKind::Executable => "Executable",
            ProjectKind::GuiApp => "SwiftUI App",
        };
        write!(f, "{s}")
    }
}

/// Answers collected before scaffolding starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    pub name: String,
    pub kind: ProjectKind,
    pub reinit_git: bool,
}

pub struct ScaffoldPipeline<'a> {
    runner: &'a dyn CommandRunner,
    config: &'a ToolConfig,
    repo_root: PathBuf,
}

impl<'a> ScaffoldPipeline<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        config: &'a ToolConfig,
        repo_root: impl AsRef<Path>,
    ) -> Self {
        Self { runner, config, repo_root: repo_root.as_ref().to_path_buf() }
    }

    /// Runs the whole scaffold and returns the layout of the new project.
    ///
    /// Nothing is touched unless the package still carries the placeholder name.
    pub fn run(&self, options: &ScaffoldOptions) -> Result<ProjectLayout> {
        println!("Setting up {}...", options.name);

        require_all(&[Tool::SWIFT, Tool::CARGO], |tool| self.runner.is_available(tool))?;

        let manifest = PackageManifest::dump(self.runner, &self.repo_root)?;
        if !manifest.is_placeholder() {
            return Err(Error::AlreadySetUp { name: manifest.name });
        }

        let placeholder = ProjectLayout::new(&self.repo_root, PLACEHOLDER_NAME);
        let project = ProjectLayout::new(&self.repo_root, &options.name);
        log::debug!("Scaffolding {} ({}) as {}", project.name, project.snake_name, options.kind);

        let renames = rename::plan(&placeholder, &project);
        let ignore = self.config.rewrite_ignore_set()?;
        let tokens = TokenMap::for_project(&project)?;

        let mut engine = get_template_engine();
        add_embedded_templates(&mut engine)?;
        let context = TemplateContext::new(&project, options.kind).to_value()?;
        let main_module =
            sources::MainModule::plan(&engine, &context, &placeholder, &project, options.kind)?;
        let manifest_source = engine.render_named(embedded::PACKAGE_MANIFEST_NAME, &context)?;
        let readme = if options.reinit_git {
            Some(engine.render_named(embedded::README_NAME, &context)?)
        } else {
            None
        };

        rename::apply(&renames)?;
        sources::rewrite_checked_in(&project, &tokens, &ignore)?;
        main_module.apply(&tokens)?;
        write_file(&manifest_source, &project.package_manifest)?;

        let tools_version = Invocation::new("swift")
            .args(["package", "tools-version", "--set-current"])
            .current_dir(&self.repo_root);
        run_checked(self.runner, &tools_version, "Failed to set the Swift tools version")?;

        if let Some(readme) = readme {
            vcs::reinitialize(&self.repo_root)?;
            write_file(&readme, self.repo_root.join(embedded::README_NAME))?;
        }

        println!("Done!");
        Ok(project)
    }
}
