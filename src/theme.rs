use crate::color::{ColorToken, CURRENT, INHERIT, TRANSPARENT, WHITE};
use crate::errors::{ConfigError, Result};
use indexmap::IndexMap;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Palette names the build tool's stylesheet contract requires.
pub const REQUIRED_PALETTE_KEYS: [&str; 12] = [
    "inherit",
    "current",
    "transparent",
    "white",
    "primary",
    "secondary",
    "tertiary",
    "success",
    "alert",
    "warning",
    "black",
    "gray",
];

/// Palette entries that must be shade maps with a `DEFAULT` key.
const SHADED_PALETTE_KEYS: [&str; 2] = ["gray", "background"];

/// One step of the font-size scale: a size and its line height.
///
/// Wire form is the two-element array Tailwind expects, e.g.
/// `["20px", "25px"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSize {
    pub size: String,
    pub line_height: String,
}

impl FontSize {
    pub fn new(size: impl Into<String>, line_height: impl Into<String>) -> Self {
        Self {
            size: size.into(),
            line_height: line_height.into(),
        }
    }

    pub fn as_pair(&self) -> (&str, &str) {
        (&self.size, &self.line_height)
    }
}

impl Serialize for FontSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        (&self.size, &self.line_height).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FontSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let (size, line_height) = <(String, String)>::deserialize(deserializer)?;
        Ok(Self { size, line_height })
    }
}

/// Container centering and per-breakpoint padding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    pub center: bool,
    /// Keyed by breakpoint name; `DEFAULT` applies below the first breakpoint.
    pub padding: IndexMap<String, String>,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            center: true,
            padding: IndexMap::from([
                ("DEFAULT".to_string(), "1rem".to_string()),
                ("lg".to_string(), "4rem".to_string()),
            ]),
        }
    }
}

/// The `theme` section of the descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub colors: IndexMap<String, ColorToken>,

    /// `None` means the theme does not customize the container; merging
    /// leaves the base container untouched in that case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerConfig>,

    #[serde(rename = "fontFamily")]
    pub font_family: IndexMap<String, Vec<String>>,

    #[serde(rename = "fontSize")]
    pub font_size: IndexMap<String, FontSize>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: default_palette(),
            container: None,
            font_family: IndexMap::from([(
                "sans".to_string(),
                vec![
                    "Source Sans Pro".to_string(),
                    "ui-sans-serif".to_string(),
                    "system-ui".to_string(),
                    "sans-serif".to_string(),
                ],
            )]),
            font_size: default_font_scale(),
        }
    }
}

impl Theme {
    /// Check the palette and scales against the build tool's contract.
    pub fn validate(&self) -> Result<()> {
        for key in REQUIRED_PALETTE_KEYS {
            if !self.colors.contains_key(key) {
                return Err(ConfigError::MissingPaletteKey {
                    key: key.to_string(),
                });
            }
        }
        for name in SHADED_PALETTE_KEYS {
            match self.colors.get(name) {
                Some(token) if token.default_shade().is_some() => {}
                _ => {
                    return Err(ConfigError::MissingDefaultShade {
                        name: name.to_string(),
                    })
                }
            }
        }
        if let Some(container) = &self.container {
            if !container.padding.contains_key("DEFAULT") {
                return Err(ConfigError::MissingDefaultPadding);
            }
        }
        Ok(())
    }
}

/// Decidim's palette: keyword colors, six variable-backed semantic colors,
/// and the gray/background shade maps.
fn default_palette() -> IndexMap<String, ColorToken> {
    IndexMap::from([
        ("inherit".to_string(), ColorToken::literal(INHERIT)),
        ("current".to_string(), ColorToken::literal(CURRENT)),
        ("transparent".to_string(), ColorToken::literal(TRANSPARENT)),
        ("white".to_string(), ColorToken::literal(WHITE)),
        ("primary".to_string(), ColorToken::dynamic("--primary-rgb")),
        (
            "secondary".to_string(),
            ColorToken::dynamic("--secondary-rgb"),
        ),
        (
            "tertiary".to_string(),
            ColorToken::dynamic("--tertiary-rgb"),
        ),
        ("success".to_string(), ColorToken::dynamic("--success-rgb")),
        ("alert".to_string(), ColorToken::dynamic("--alert-rgb")),
        ("warning".to_string(), ColorToken::dynamic("--warning-rgb")),
        ("black".to_string(), ColorToken::literal("#020203")),
        (
            "gray".to_string(),
            ColorToken::shades([
                ("DEFAULT", "#6B72804D"), // 30% opacity
                ("2", "#3E4C5C"),
                ("3", "#E1E5EF"),
                ("4", "#242424"),
            ]),
        ),
        (
            "background".to_string(),
            ColorToken::shades([
                ("DEFAULT", "#F3F4F7"),
                ("2", "#FAFAFA"),
                ("3", "#EFEFEF"),
                ("4", "#E4EEFF99"), // 60% opacity
            ]),
        ),
    ])
}

fn default_font_scale() -> IndexMap<String, FontSize> {
    IndexMap::from([
        ("xs".to_string(), FontSize::new("13px", "16px")),
        ("sm".to_string(), FontSize::new("14px", "18px")),
        ("md".to_string(), FontSize::new("16px", "20px")),
        ("lg".to_string(), FontSize::new("18px", "23px")),
        ("xl".to_string(), FontSize::new("20px", "25px")),
        ("2xl".to_string(), FontSize::new("24px", "30px")),
        ("3xl".to_string(), FontSize::new("32px", "40px")),
        ("4xl".to_string(), FontSize::new("36px", "45px")),
    ])
}
