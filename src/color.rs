use indexmap::IndexMap;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Keyword colors every palette carries, owned here instead of being pulled
/// from an external palette module.
pub const INHERIT: &str = "inherit";
pub const CURRENT: &str = "currentColor";
pub const TRANSPARENT: &str = "transparent";
pub const WHITE: &str = "#fff";

/// Placeholder the external build tool substitutes with the utility's
/// opacity modifier (e.g. `text-primary/50`).
const ALPHA_PLACEHOLDER: &str = "<alpha-value>";

/// An opacity-aware color token bound to a runtime CSS variable.
///
/// The variable is expected to hold bare RGB channels (`"59 130 246"`), so
/// the resolved expression stays valid both with and without an alpha
/// channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicColor {
    variable: String,
}

impl DynamicColor {
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
        }
    }

    /// Name of the CSS variable this token reads at runtime.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Produce the color expression for an optional opacity.
    ///
    /// Omitting the opacity resolves the variable at full opacity with no
    /// alpha channel; passing one (zero included) applies that exact alpha.
    /// The two cases are distinct on purpose: `Some(0.0)` renders a fully
    /// transparent color, `None` renders an opaque one.
    pub fn resolve(&self, opacity: Option<f64>) -> String {
        match opacity {
            None => format!("rgb(var({}))", self.variable),
            Some(value) => format!("rgb(var({}) / {})", self.variable, value),
        }
    }

    /// Wire form understood by the build tool: the alpha slot is left as a
    /// placeholder the tool fills in per utility.
    pub fn alpha_template(&self) -> String {
        format!("rgb(var({}) / {})", self.variable, ALPHA_PLACEHOLDER)
    }

    /// Parse the wire form back into a token. Returns `None` for anything
    /// that is not an alpha-template expression.
    pub fn from_alpha_template(value: &str) -> Option<Self> {
        let inner = value.strip_prefix("rgb(var(")?;
        let variable = inner.strip_suffix(&format!(") / {})", ALPHA_PLACEHOLDER))?;
        if variable.is_empty() || variable.contains(')') {
            return None;
        }
        Some(Self::new(variable))
    }
}

/// One entry in the color palette.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorToken {
    /// A fixed color value (`"#020203"`, `"transparent"`).
    Literal(String),
    /// Nested shade map; the `DEFAULT` key is the bare-name value.
    Shades(IndexMap<String, String>),
    /// Variable-backed token resolved per use site.
    Dynamic(DynamicColor),
}

impl ColorToken {
    pub fn literal(value: impl Into<String>) -> Self {
        ColorToken::Literal(value.into())
    }

    pub fn dynamic(variable: impl Into<String>) -> Self {
        ColorToken::Dynamic(DynamicColor::new(variable))
    }

    pub fn shades<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        ColorToken::Shades(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// The `DEFAULT` entry of a shade map, if this token has one.
    pub fn default_shade(&self) -> Option<&str> {
        match self {
            ColorToken::Shades(map) => map.get("DEFAULT").map(String::as_str),
            _ => None,
        }
    }
}

impl Serialize for ColorToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ColorToken::Literal(value) => serializer.serialize_str(value),
            ColorToken::Shades(map) => map.serialize(serializer),
            ColorToken::Dynamic(color) => serializer.serialize_str(&color.alpha_template()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawColorToken {
    Literal(String),
    Shades(IndexMap<String, String>),
}

impl<'de> Deserialize<'de> for ColorToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawColorToken::deserialize(deserializer)? {
            RawColorToken::Literal(value) => match DynamicColor::from_alpha_template(&value) {
                Some(color) => ColorToken::Dynamic(color),
                None => ColorToken::Literal(value),
            },
            RawColorToken::Shades(map) => ColorToken::Shades(map),
        })
    }
}
