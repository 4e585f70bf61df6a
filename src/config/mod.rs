//! Repository-level configuration for the setup and build tooling
//!
//! The configuration file is optional; every field has a default that
//! matches the stock template layout.
//! - `loader`: Configuration file discovery, parsing and validation

pub mod loader;


pub use loader::ToolConfig;
