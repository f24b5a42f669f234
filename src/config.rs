use crate::content::ContentSources;
use crate::errors::{ConfigError, Result};
use crate::plugin::PluginRef;
use crate::theme::{ContainerConfig, Theme};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The Tailwind build configuration descriptor.
///
/// Authored as base content roots plus theme tokens; [`to_build_json`]
/// produces the exact record the external build tool consumes, with content
/// roots expanded into scan globs.
///
/// [`to_build_json`]: TailwindConfig::to_build_json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TailwindConfig {
    /// Base directories scanned for utility-class usage.
    pub content: ContentSources,

    /// Patterns exempt from purging. `None` keeps purging fully enabled;
    /// setting `[".*"]` effectively disables it. No purge logic lives here,
    /// the field only passes through to the build tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safelist: Option<Vec<String>>,

    /// Color palette, container, and typography scales.
    pub theme: Theme,

    /// External plugins, in precedence order.
    pub plugins: Vec<PluginRef>,
}

impl Default for TailwindConfig {
    fn default() -> Self {
        Self {
            content: ContentSources::default(),
            safelist: None,
            theme: Theme {
                container: Some(ContainerConfig::default()),
                ..Theme::default()
            },
            plugins: vec![PluginRef::new("@tailwindcss/typography")],
        }
    }
}

impl TailwindConfig {
    /// Default descriptor with extra content roots (one per installed
    /// application module) appended ahead of the working directory.
    pub fn with_content_roots<I, S>(roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::default();
        let mut content = ContentSources::new(roots);
        content.push_root(".");
        config.content = content;
        config
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Invalid {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::Invalid {
            message: format!("Failed to parse YAML config: {}", e),
        })
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Invalid {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::Invalid {
            message: format!("Failed to parse JSON config: {}", e),
        })
    }

    /// Load configuration from a file (auto-detect format)
    pub fn from_file(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(ConfigError::Invalid {
                message: format!(
                    "Unsupported config file format: {}. Use .yaml, .yml, or .json",
                    path.display()
                ),
            }),
        }
    }

    /// Merge with another configuration. The other side's content roots are
    /// appended, its theme keys override matching ones, and its container and
    /// safelist replace this one's only when set.
    pub fn merge(mut self, other: Self) -> Self {
        for root in other.content.roots() {
            self.content.push_root(root.clone());
        }

        self.theme.colors.extend(other.theme.colors);
        self.theme.font_family.extend(other.theme.font_family);
        self.theme.font_size.extend(other.theme.font_size);
        if other.theme.container.is_some() {
            self.theme.container = other.theme.container;
        }

        if other.safelist.is_some() {
            self.safelist = other.safelist;
        }

        for plugin in other.plugins {
            if !self.plugins.contains(&plugin) {
                self.plugins.push(plugin);
            }
        }

        self
    }

    /// Check the descriptor against the build tool's contract: a non-empty
    /// content set, the required palette keys, and the mandatory DEFAULT
    /// entries.
    pub fn validate(&self) -> Result<()> {
        if self.content.is_empty() {
            return Err(ConfigError::NoContentSources);
        }
        if self.theme.container.is_none() {
            return Err(ConfigError::MissingContainer);
        }
        self.theme.validate()
    }

    /// Validate, then additionally verify every content root exists on disk.
    pub fn check(&self) -> Result<()> {
        self.validate()?;
        self.content.check()
    }

    /// The record the build tool reads: `content` (expanded globs),
    /// `safelist` (only when set), `theme`, `plugins`.
    pub fn to_build_json(&self) -> Result<serde_json::Value> {
        let mut record = serde_json::Map::new();
        record.insert(
            "content".to_string(),
            serde_json::to_value(self.content.expand())?,
        );
        if let Some(safelist) = &self.safelist {
            record.insert("safelist".to_string(), serde_json::to_value(safelist)?);
        }
        record.insert("theme".to_string(), serde_json::to_value(&self.theme)?);
        record.insert("plugins".to_string(), serde_json::to_value(&self.plugins)?);
        Ok(serde_json::Value::Object(record))
    }

    /// Serialize the build record to a JSON string.
    pub fn emit(&self, pretty: bool) -> Result<String> {
        let record = self.to_build_json()?;
        let out = if pretty {
            serde_json::to_string_pretty(&record)?
        } else {
            serde_json::to_string(&record)?
        };
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorToken;
    use indexmap::IndexMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_validates() {
        let config = TailwindConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.safelist.is_none());
        assert_eq!(config.plugins.len(), 1);
        assert_eq!(config.plugins[0].name(), "@tailwindcss/typography");
    }

    #[test]
    fn test_with_content_roots_keeps_working_directory() {
        let config = TailwindConfig::with_content_roots(["modules/core", "modules/admin"]);
        assert_eq!(
            config.content.roots(),
            &["modules/core", "modules/admin", "."]
        );
    }

    #[test]
    fn test_yaml_config_loading() {
        let yaml_content = r##"
content:
  - "modules/core"
  - "modules/admin"
theme:
  colors:
    primary: "rgb(var(--brand-rgb) / <alpha-value>)"
    black: "#000"
safelist:
  - ".*"
"##;

        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        file.write_all(yaml_content.as_bytes()).unwrap();

        let config = TailwindConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.content.roots().len(), 2);
        assert_eq!(
            config.theme.colors.get("primary"),
            Some(&ColorToken::dynamic("--brand-rgb"))
        );
        assert_eq!(
            config.theme.colors.get("black"),
            Some(&ColorToken::literal("#000"))
        );
        assert_eq!(config.safelist, Some(vec![".*".to_string()]));
    }

    #[test]
    fn test_json_config_loading() {
        let json_content = r##"{
  "content": ["modules/core"],
  "theme": {
    "colors": {
      "brand": "#0066cc"
    },
    "container": {"center": false, "padding": {"DEFAULT": "2rem"}},
    "fontFamily": {},
    "fontSize": {"xl": ["22px", "28px"]}
  }
}"##;

        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        file.write_all(json_content.as_bytes()).unwrap();

        let config = TailwindConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.content.roots(), &["modules/core"]);
        assert_eq!(
            config.theme.colors.get("brand"),
            Some(&ColorToken::literal("#0066cc"))
        );
        assert_eq!(config.theme.font_size["xl"].as_pair(), ("22px", "28px"));
        assert!(!config.theme.container.unwrap().center);
    }

    #[test]
    fn test_from_file_rejects_unknown_extension() {
        let file = NamedTempFile::with_suffix(".toml").unwrap();
        assert!(matches!(
            TailwindConfig::from_file(file.path()),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn test_config_merge() {
        let base = TailwindConfig::default();

        let mut other = TailwindConfig::default();
        other.content = ContentSources::new(["modules/custom"]);
        other
            .theme
            .colors
            .insert("primary".to_string(), ColorToken::literal("#222"));
        other
            .theme
            .colors
            .insert("brand".to_string(), ColorToken::literal("#333"));
        other.safelist = Some(vec![".*".to_string()]);

        let merged = base.merge(other);
        assert_eq!(merged.content.roots(), &[".", "modules/custom"]);
        assert_eq!(
            merged.theme.colors.get("primary"),
            Some(&ColorToken::literal("#222"))
        );
        assert_eq!(
            merged.theme.colors.get("brand"),
            Some(&ColorToken::literal("#333"))
        );
        assert!(merged.safelist.is_some());
        // the duplicate typography plugin is not appended twice
        assert_eq!(merged.plugins.len(), 1);
    }

    #[test]
    fn test_merge_keeps_container_unless_other_customizes_it() {
        let mut base = TailwindConfig::default();
        let mut padded = ContainerConfig::default();
        padded
            .padding
            .insert("DEFAULT".to_string(), "2rem".to_string());
        base.theme.container = Some(padded.clone());

        // a config file that never mentions the container deserializes to None
        let mut other = TailwindConfig::default();
        other.theme.container = None;
        let merged = base.clone().merge(other);
        assert_eq!(merged.theme.container, Some(padded));

        let mut other = TailwindConfig::default();
        other.theme.container = Some(ContainerConfig {
            center: false,
            padding: IndexMap::from([("DEFAULT".to_string(), "3rem".to_string())]),
        });
        let merged = base.merge(other);
        let container = merged.theme.container.unwrap();
        assert!(!container.center);
        assert_eq!(container.padding["DEFAULT"], "3rem");
    }

    #[test]
    fn test_build_json_shape() {
        let config = TailwindConfig::default();
        let record = config.to_build_json().unwrap();

        let keys: Vec<&String> = record.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["content", "theme", "plugins"]);

        assert_eq!(record["content"].as_array().unwrap().len(), 5);
        assert_eq!(record["content"][0], "./app/views/**/*.html.erb");
        assert!(record["theme"]["colors"].is_object());
        assert!(record["theme"]["fontFamily"].is_object());
        assert!(record["theme"]["fontSize"].is_object());
        assert_eq!(record["plugins"][0], "@tailwindcss/typography");
    }

    #[test]
    fn test_build_json_includes_safelist_only_when_set() {
        let mut config = TailwindConfig::default();
        assert!(config.to_build_json().unwrap().get("safelist").is_none());

        config.safelist = Some(vec![".*".to_string()]);
        let record = config.to_build_json().unwrap();
        assert_eq!(record["safelist"], serde_json::json!([".*"]));
    }
}
