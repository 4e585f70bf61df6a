//! Dialoguer-based implementation of the setup prompts

use dialoguer::{Confirm, Input};

use super::interface::{parse_kind_choice, SetupPrompter};
use crate::error::{Error, Result};
use crate::scaffold::ProjectKind;

/// Terminal prompter used by `uniffi-setup`.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupPrompter for DialoguerPrompter {
    fn project_name(&self) -> Result<String> {
        let name: String = Input::new()
            .with_prompt("Project name")
            .validate_with(|input: &String| {
                if input.trim().is_empty() {
                    Err("Project name must not be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;
        Ok(name.trim().to_string())
    }

    fn project_kind(&self) -> Result<ProjectKind> {
        println!("Available project types:");
        for (index, kind) in ProjectKind::ALL.iter().enumerate() {
            println!("{}. {kind}", index + 1);
        }

        let choice: String = Input::new()
            .with_prompt("Project type")
            .validate_with(|input: &String| match parse_kind_choice(input) {
                Some(_) => Ok(()),
                None => Err("Invalid project type. Please enter a number between 1 and 3"),
            })
            .interact_text()?;

        parse_kind_choice(&choice).ok_or_else(|| {
            Error::Other(anyhow::anyhow!("invalid project type '{choice}'"))
        })
    }

    fn reinit_git(&self) -> Result<bool> {
        Ok(Confirm::new()
            .with_prompt("Should a new git repository be setup?")
            .default(true)
            .wait_for_newline(false)
            .interact()?)
    }
}
