use serde::{Deserialize, Serialize};

/// Opaque handle to an external Tailwind plugin, loaded by name by the build
/// tool. Nothing about the plugin is inspected here; declaration order is
/// kept because it can affect style precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginRef {
    name: String,
}

impl PluginRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for PluginRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
