//! The fixed repository layout shared by the setup and build pipelines.
//!
//! All paths are derived from the repository root and the package name when
//! the layout is created, before any file is touched.

use std::path::{Path, PathBuf};

use crate::constants::{PACKAGE_MANIFEST, UNIVERSAL_TARGET_DIR};
use crate::naming::to_snake_identifier;

/// Cargo build profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Debug,
    Release,
}

impl Profile {
    /// Directory name cargo uses under `target/`.
    pub fn dir_name(self) -> &'static str {
        match self {
            Profile::Debug => "debug",
            Profile::Release => "release",
        }
    }
}

/// Every path the pipelines read, rename or write for one package name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub name: String,
    pub snake_name: String,

    pub repo_root: PathBuf,
    pub package_manifest: PathBuf,
    pub sources_dir: PathBuf,

    pub main_module_dir: PathBuf,
    pub bindings_module_dir: PathBuf,
    pub c_bindings_module_dir: PathBuf,
    pub c_bindings_source: PathBuf,
    pub c_bindings_header: PathBuf,

    pub rust_module_dir: PathBuf,
    pub cargo_dir: PathBuf,
    pub cargo_src_dir: PathBuf,
    pub include_dir: PathBuf,
    pub lib_dir: PathBuf,
    pub udl_path: PathBuf,

    pub swift_bindings_path: PathBuf,
    pub c_header_path: PathBuf,
    pub modulemap_path: PathBuf,
    pub xcframework_path: PathBuf,
}

impl ProjectLayout {
    pub fn new<P: AsRef<Path>>(repo_root: P, name: &str) -> Self {
        let repo_root = repo_root.as_ref().to_path_buf();
        let snake_name = to_snake_identifier(name);

        let sources_dir = repo_root.join("Sources");

        let main_module_dir = sources_dir.join(name);
        let bindings_module_dir = sources_dir.join(format!("{name}Bindings"));
        let c_bindings_module_dir = sources_dir.join(format!("{name}CBindings"));
        let c_bindings_source = c_bindings_module_dir.join(format!("{name}CBindings.c"));
        let c_bindings_header =
            c_bindings_module_dir.join("include").join(format!("{name}CBindings.h"));

        let rust_module_dir = sources_dir.join(format!("{name}Rust"));
        let cargo_dir = rust_module_dir.join("cargo");
        let cargo_src_dir = cargo_dir.join("src");
        let include_dir = rust_module_dir.join("include");
        let lib_dir = rust_module_dir.join("lib");
        let udl_path = cargo_src_dir.join(format!("{snake_name}.udl"));

        let swift_bindings_path = bindings_module_dir.join(format!("{name}Bindings.swift"));
        let c_header_path = include_dir.join(format!("{name}Rust.h"));
        let modulemap_path = include_dir.join(format!("{name}Rust.modulemap"));
        let xcframework_path = lib_dir.join(format!("{name}Rust.xcframework"));

        Self {
            name: name.to_string(),
            package_manifest: repo_root.join(PACKAGE_MANIFEST),
            repo_root,
            sources_dir,
            main_module_dir,
            bindings_module_dir,
            c_bindings_module_dir,
            c_bindings_source,
            c_bindings_header,
            rust_module_dir,
            cargo_dir,
            cargo_src_dir,
            include_dir,
            lib_dir,
            udl_path,
            swift_bindings_path,
            c_header_path,
            modulemap_path,
            xcframework_path,
            snake_name,
        }
    }

    /// UDL path relative to the cargo package, as passed to the generator.
    pub fn udl_relative_path(&self) -> PathBuf {
        Path::new("src").join(format!("{}.udl", self.snake_name))
    }

    /// Swift source emitted by the binding generator.
    pub fn generated_swift_path(&self) -> PathBuf {
        self.include_dir.join(format!("{}.swift", self.snake_name))
    }

    /// C header emitted by the binding generator.
    pub fn generated_header_path(&self) -> PathBuf {
        self.include_dir.join(format!("{}FFI.h", self.snake_name))
    }

    /// Module map emitted by the binding generator.
    pub fn generated_modulemap_path(&self) -> PathBuf {
        self.include_dir.join(format!("{}FFI.modulemap", self.snake_name))
    }

    /// Token the generator uses for the raw C surface.
    pub fn generated_ffi_token(&self) -> String {
        format!("{}FFI", self.snake_name)
    }

    /// Replacement for the FFI token inside the Swift bindings.
    pub fn c_bindings_module_name(&self) -> String {
        format!("{}CBindings", self.name)
    }

    /// Replacement for the FFI token inside the header and module map.
    pub fn rust_module_name(&self) -> String {
        format!("{}Rust", self.name)
    }

    /// Static library built by cargo, optionally for an explicit target triple.
    pub fn static_lib_path(&self, profile: Profile, target: Option<&str>) -> PathBuf {
        let mut dir = self.cargo_dir.join("target");
        if let Some(target) = target {
            dir.push(target);
        }
        dir.join(profile.dir_name()).join(self.static_lib_name())
    }

    /// Merged multi-architecture static library.
    pub fn universal_lib_path(&self, profile: Profile) -> PathBuf {
        self.static_lib_path(profile, Some(UNIVERSAL_TARGET_DIR))
    }

    pub fn static_lib_name(&self) -> String {
        format!("lib{}.a", self.snake_name)
    }
}
