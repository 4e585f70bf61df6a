//! Rewriting checked-in files and writing the main module's Swift sources.

use globset::GlobSet;
use std::path::PathBuf;
use walkdir::WalkDir;

use crate::error::Result;
use crate::ioutils::{rename, write_new_file};
use crate::layout::ProjectLayout;
use crate::renderer::TemplateRenderer;
use crate::scaffold::ProjectKind;
use crate::template::{embedded, TokenMap};

/// Workspace manifest some checkouts keep next to `Package.swift`.
const ROOT_CARGO_MANIFEST: &str = "Cargo.toml";

/// Replaces placeholder tokens in the C bindings and the cargo package.
///
/// Paths under the cargo package matching `ignore`, relative to the package
/// root, are skipped. Returns the number of files that changed.
pub fn rewrite_checked_in(
    project: &ProjectLayout,
    tokens: &TokenMap,
    ignore: &GlobSet,
) -> Result<usize> {
    let mut rewritten = 0;

    let root_cargo_manifest = project.repo_root.join(ROOT_CARGO_MANIFEST);
    let mut files = vec![project.c_bindings_source.clone(), project.c_bindings_header.clone()];
    if root_cargo_manifest.is_file() {
        files.push(root_cargo_manifest);
    }
    for path in &files {
        if tokens.rewrite_file(path)? {
            rewritten += 1;
        }
    }

    let cargo_dir = &project.cargo_dir;
    let walker = WalkDir::new(cargo_dir).into_iter().filter_entry(|entry| {
        let relative = entry.path().strip_prefix(cargo_dir).unwrap_or(entry.path());
        !ignore.is_match(relative)
    });
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if tokens.rewrite_file(entry.path())? {
            rewritten += 1;
        }
    }

    log::debug!("Rewrote {rewritten} checked-in files");
    Ok(rewritten)
}

/// How the main module's placeholder source is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainModule {
    /// The placeholder is renamed and its tokens substituted.
    Library { from: PathBuf, to: PathBuf },
    /// The placeholder is deleted and rendered entry points are written.
    Generated { placeholder: PathBuf, files: Vec<(PathBuf, String)> },
}

impl MainModule {
    /// Renders everything `kind` needs, addressed at the project's paths.
    pub fn plan(
        engine: &dyn TemplateRenderer,
        context: &serde_json::Value,
        placeholder: &ProjectLayout,
        project: &ProjectLayout,
        kind: ProjectKind,
    ) -> Result<Self> {
        let main_dir = &project.main_module_dir;
        let placeholder_source = main_dir.join(swift_file(&placeholder.name));

        if !kind.is_executable() {
            let to = main_dir.join(swift_file(&project.name));
            return Ok(MainModule::Library { from: placeholder_source, to });
        }

        let templates: Vec<(&str, PathBuf)> = match kind {
            ProjectKind::GuiApp => {
                let app = main_dir.join(swift_file(&format!("{}App", project.name)));
                let content_view = main_dir.join(embedded::GUI_CONTENT_VIEW_NAME);
                vec![(embedded::GUI_APP_NAME, app), (embedded::GUI_CONTENT_VIEW_NAME, content_view)]
            }
            _ => {
                let main = main_dir.join(embedded::EXECUTABLE_MAIN_NAME);
                vec![(embedded::EXECUTABLE_MAIN_NAME, main)]
            }
        };
        let files = templates
            .into_iter()
            .map(|(template, dest)| {
                engine.render_named(template, context).map(|content| (dest, content))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(MainModule::Generated { placeholder: placeholder_source, files })
    }

    pub fn apply(&self, tokens: &TokenMap) -> Result<()> {
        match self {
            MainModule::Library { from, to } => {
                rename(from, to)?;
                tokens.rewrite_file(to)?;
            }
            MainModule::Generated { placeholder, files } => {
                std::fs::remove_file(placeholder)?;
                for (dest, content) in files {
                    write_new_file(content, dest)?;
                }
            }
        }
        Ok(())
    }
}

fn swift_file(stem: &str) -> String {
    format!("{stem}.swift")
}
