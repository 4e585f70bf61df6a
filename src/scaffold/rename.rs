use std::path::PathBuf;

use crate::error::Result;
use crate::ioutils::rename;
use crate::layout::ProjectLayout;

/// One filesystem move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub from: PathBuf,
    pub to: PathBuf,
}

impl Rename {
    fn new(from: PathBuf, to: PathBuf) -> Self {
        Self { from, to }
    }
}

/// Lists the moves from the placeholder layout to the project layout.
///
/// Files inside a renamed directory are addressed through the directory's
/// new location, so the moves must be applied in order.
pub fn plan(placeholder: &ProjectLayout, project: &ProjectLayout) -> Vec<Rename> {
    let moved_into = |dir: &PathBuf, file: &PathBuf| -> PathBuf {
        match file.file_name() {
            Some(name) => dir.join(name),
            None => dir.clone(),
        }
    };

    vec![
        Rename::new(placeholder.main_module_dir.clone(), project.main_module_dir.clone()),
        Rename::new(placeholder.bindings_module_dir.clone(), project.bindings_module_dir.clone()),
        Rename::new(
            placeholder.c_bindings_module_dir.clone(),
            project.c_bindings_module_dir.clone(),
        ),
        Rename::new(
            moved_into(&project.c_bindings_module_dir, &placeholder.c_bindings_source),
            project.c_bindings_source.clone(),
        ),
        Rename::new(
            moved_into(&project.c_bindings_module_dir.join("include"), &placeholder.c_bindings_header),
            project.c_bindings_header.clone(),
        ),
        Rename::new(placeholder.rust_module_dir.clone(), project.rust_module_dir.clone()),
        Rename::new(
            moved_into(&project.cargo_src_dir, &placeholder.udl_path),
            project.udl_path.clone(),
        ),
    ]
}

pub fn apply(renames: &[Rename]) -> Result<()> {
    for Rename { from, to } in renames {
        if from == to {
            continue;
        }
        rename(from, to)?;
    }
    Ok(())
}
