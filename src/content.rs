use crate::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Per-root glob suffixes the build tool scans for utility-class usage.
/// Order matters: it is preserved in the emitted content list.
pub const CONTENT_GLOBS: [&str; 5] = [
    "app/views/**/*.html.erb",
    "app/cells/**/*.{rb,erb}",
    "app/helpers/**/*.rb",
    "app/packs/**/*.js",
    "lib/**/*.rb",
];

/// Ordered set of base directories to scan for class usage.
///
/// Each root expands into the fixed [`CONTENT_GLOBS`] patterns. Duplicate
/// roots are harmless but wasteful, so expansion de-duplicates them while
/// keeping first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentSources {
    roots: Vec<String>,
}

impl Default for ContentSources {
    fn default() -> Self {
        Self {
            roots: vec![".".to_string()],
        }
    }
}

impl ContentSources {
    pub fn new<I, S>(roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut sources = Self { roots: Vec::new() };
        for root in roots {
            sources.push_root(root);
        }
        sources
    }

    /// Append a root, ignoring exact duplicates.
    pub fn push_root(&mut self, root: impl Into<String>) {
        let root = root.into();
        if !self.roots.contains(&root) {
            self.roots.push(root);
        }
    }

    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Expand every root into the fixed glob patterns, in declaration order.
    pub fn expand(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut patterns = Vec::with_capacity(self.roots.len() * CONTENT_GLOBS.len());
        for root in &self.roots {
            if !seen.insert(root.as_str()) {
                continue;
            }
            let root = root.trim_end_matches('/');
            for suffix in CONTENT_GLOBS {
                patterns.push(format!("{}/{}", root, suffix));
            }
        }
        patterns
    }

    /// Verify every root exists as a directory and every expanded pattern is
    /// a well-formed glob. The build tool silently scans nothing for a
    /// missing root, so this surfaces the authoring error early.
    pub fn check(&self) -> Result<()> {
        if self.roots.is_empty() {
            return Err(ConfigError::NoContentSources);
        }
        for root in &self.roots {
            if !Path::new(root).is_dir() {
                return Err(ConfigError::MissingContentRoot { path: root.clone() });
            }
        }
        for pattern in self.expand() {
            glob::Pattern::new(&pattern)?;
        }
        Ok(())
    }
}
