use crate::error::Result;
use crate::scaffold::{ProjectKind, ScaffoldOptions};

/// Source of the three setup answers.
pub trait SetupPrompter {
    /// Non-empty project name in proper case.
    fn project_name(&self) -> Result<String>;
    fn project_kind(&self) -> Result<ProjectKind>;
    /// Whether to replace the template's git history with a fresh repository.
    fn reinit_git(&self) -> Result<bool>;
}

/// Asks every question in order.
pub fn collect_options(prompter: &dyn SetupPrompter) -> Result<ScaffoldOptions> {
    let name = prompter.project_name()?;
    let kind = prompter.project_kind()?;
    let reinit_git = prompter.reinit_git()?;
    Ok(ScaffoldOptions { name, kind, reinit_git })
}

/// Parses a 1-based project type menu entry.
pub fn parse_kind_choice(input: &str) -> Option<ProjectKind> {
    input.trim().parse::<u32>().ok().and_then(ProjectKind::from_choice)
}
