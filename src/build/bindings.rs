//! Swift/C binding generation and the renames that follow it.

use crate::error::{Error, Result};
use crate::ioutils::{ensure_exists, rename};
use crate::layout::ProjectLayout;
use crate::process::{run_checked, CommandRunner, Invocation};
use crate::template::TokenMap;

/// Runs the binding generator shipped as a binary target of the cargo package.
pub fn generate(runner: &dyn CommandRunner, layout: &ProjectLayout, bindgen_bin: &str) -> Result<()> {
    let invocation = Invocation::new("cargo")
        .args(["run", "--bin", bindgen_bin, "--", "generate", "--language", "swift", "--out-dir"])
        .arg(&layout.include_dir)
        .arg(layout.udl_relative_path())
        .current_dir(&layout.cargo_dir);
    run_checked(runner, &invocation, "Failed to generate C and Swift bindings")
}

/// Moves the three generator outputs to their proper-case locations.
///
/// All three must exist before any of them is moved.
pub fn relocate(layout: &ProjectLayout) -> Result<()> {
    let moves = [
        (layout.generated_swift_path(), &layout.swift_bindings_path),
        (layout.generated_header_path(), &layout.c_header_path),
        (layout.generated_modulemap_path(), &layout.modulemap_path),
    ];

    for (generated, _) in &moves {
        ensure_exists(generated)?;
    }
    for (generated, target) in &moves {
        rename(generated, target)?;
    }
    Ok(())
}

/// Replaces the generator's `<snake>FFI` module token.
///
/// The Swift source refers to the C-bindings module, while the header and
/// module map expose the Rust module name.
pub fn rewrite_symbol_prefixes(layout: &ProjectLayout) -> Result<()> {
    let ffi_token = layout.generated_ffi_token();

    let swift_map = TokenMap::new([(ffi_token.as_str(), layout.c_bindings_module_name())])?;
    swift_map.rewrite_file(&layout.swift_bindings_path)?;

    let c_map = TokenMap::new([(ffi_token.as_str(), layout.rust_module_name())])?;
    for path in [&layout.c_header_path, &layout.modulemap_path] {
        c_map.rewrite_file(path)?;
    }

    for path in [&layout.swift_bindings_path, &layout.c_header_path, &layout.modulemap_path] {
        let bytes = std::fs::read(path)?;
        if swift_map.matches(&String::from_utf8_lossy(&bytes)) {
            return Err(Error::UnrewrittenToken {
                path: path.display().to_string(),
                token: ffi_token,
            });
        }
    }
    Ok(())
}
