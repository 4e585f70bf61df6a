//! Compile-time embedded templates.
//!
//! Each constant loads a file from the crate's `templates/` directory via
//! [`include_str!`]; paths are relative to this source file.

pub const PACKAGE_MANIFEST: &str = include_str!("../../templates/swift/Package.swift.j2");
pub const EXECUTABLE_MAIN: &str = include_str!("../../templates/swift/main.swift.j2");
pub const GUI_APP: &str = include_str!("../../templates/swift/App.swift.j2");
pub const GUI_CONTENT_VIEW: &str = include_str!("../../templates/swift/ContentView.swift.j2");
pub const README: &str = include_str!("../../templates/README.md.j2");

pub const PACKAGE_MANIFEST_NAME: &str = "Package.swift";
pub const EXECUTABLE_MAIN_NAME: &str = "main.swift";
pub const GUI_APP_NAME: &str = "App.swift";
pub const GUI_CONTENT_VIEW_NAME: &str = "ContentView.swift";
pub const README_NAME: &str = "README.md";

/// Every embedded template keyed by the name it is registered under.
pub const ALL: &[(&str, &str)] = &[
    (PACKAGE_MANIFEST_NAME, PACKAGE_MANIFEST),
    (EXECUTABLE_MAIN_NAME, EXECUTABLE_MAIN),
    (GUI_APP_NAME, GUI_APP),
    (GUI_CONTENT_VIEW_NAME, GUI_CONTENT_VIEW),
    (README_NAME, README),
];
