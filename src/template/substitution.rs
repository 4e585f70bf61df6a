use regex::Regex;
use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

use crate::constants::{PLACEHOLDER_NAME, PLACEHOLDER_SNAKE_NAME};
use crate::error::{Error, Result};
use crate::layout::ProjectLayout;

/// Literal token replacements applied in a single left-to-right pass.
///
/// All tokens are combined into one alternation, longest first, so a
/// replacement is never rescanned and the order tokens were given in does
/// not change the result.
#[derive(Debug, Clone)]
pub struct TokenMap {
    pattern: Regex,
    replacements: HashMap<String, String>,
}

impl TokenMap {
    pub fn new<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let replacements: HashMap<String, String> =
            pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        if replacements.is_empty() || replacements.keys().any(String::is_empty) {
            return Err(Error::Other(anyhow::anyhow!("substitution tokens must not be empty")));
        }

        let mut tokens: Vec<&String> = replacements.keys().collect();
        tokens.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        let alternation =
            tokens.iter().map(|t| regex::escape(t)).collect::<Vec<_>>().join("|");
        let pattern = Regex::new(&alternation)
            .map_err(|e| Error::Other(anyhow::anyhow!("invalid token pattern: {e}")))?;

        Ok(Self { pattern, replacements })
    }

    /// Placeholder identity to the identity described by `layout`.
    pub fn for_project(layout: &ProjectLayout) -> Result<Self> {
        Self::new([
            (PLACEHOLDER_NAME, layout.name.as_str()),
            (PLACEHOLDER_SNAKE_NAME, layout.snake_name.as_str()),
        ])
    }

    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, |caps: &regex::Captures<'_>| {
            self.replacements[&caps[0]].clone()
        })
    }

    /// Whether any token occurs in `text`.
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Rewrites `path` in place, returning whether its content changed.
    ///
    /// Files that are not valid UTF-8 are left untouched.
    pub fn rewrite_file<P: AsRef<Path>>(&self, path: P) -> Result<bool> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let Ok(content) = String::from_utf8(bytes) else {
            log::debug!("Skipping non-UTF8 file {}", path.display());
            return Ok(false);
        };

        match self.apply(&content) {
            Cow::Borrowed(_) => Ok(false),
            Cow::Owned(rewritten) => {
                std::fs::write(path, rewritten)?;
                log::debug!("Rewrote {}", path.display());
                Ok(true)
            }
        }
    }
}
