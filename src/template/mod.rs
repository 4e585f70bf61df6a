//! Template model for generated and rewritten project files
//!
//! - `embedded`: Versioned template files compiled into the binary
//! - `substitution`: Single-pass replacement of placeholder tokens in checked-in files

pub mod embedded;
pub mod substitution;

pub use substitution::TokenMap;

use serde::Serialize;

use crate::error::Result;
use crate::layout::ProjectLayout;
use crate::renderer::TemplateRenderer;
use crate::scaffold::ProjectKind;

/// Values available to every embedded template.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext<'a> {
    pub project_name: &'a str,
    pub kind: ProjectKind,
}

impl<'a> TemplateContext<'a> {
    pub fn new(layout: &'a ProjectLayout, kind: ProjectKind) -> Self {
        Self { project_name: &layout.name, kind }
    }

    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Registers every embedded template with `engine` under its name.
pub fn add_embedded_templates(engine: &mut dyn TemplateRenderer) -> Result<()> {
    for (name, source) in embedded::ALL {
        log::trace!("Adding embedded template {name}");
        engine.add_template(name, source)?;
    }
    Ok(())
}
