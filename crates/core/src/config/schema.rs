//! Configuration schema definitions
//!
//! Typed representation of a Weft configuration document, plus the
//! shape validation that turns a raw JSON value into one.

use crate::error::{Error, Result};
use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Top-level keys the schema recognizes
const KNOWN_KEYS: [&str; 4] = ["content", "darkMode", "theme", "plugins"];

/// A validated Weft configuration document with all defaults applied.
///
/// Built once from a raw value via [`ConfigDocument::from_raw`] and
/// immutable afterwards. Cheap to clone and safe to read from multiple
/// threads.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDocument {
    /// Glob patterns selecting the source files scanned for utility classes
    pub content: Vec<String>,

    /// How dark-mode styling is activated
    pub dark_mode: DarkMode,

    /// Theme customization layered onto the framework defaults
    pub theme: Theme,

    /// Plugin references, in activation order
    pub plugins: Vec<PluginRef>,
}

/// Dark-mode activation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DarkMode {
    /// Follow the OS preference via the `prefers-color-scheme` media query
    Media,
    /// Toggle via a `dark` class on an ancestor element
    Class,
    /// Do not generate dark-mode variants
    #[default]
    Disabled,
}

// `darkMode: false` is the boolean literal in the document, not a string.
impl Serialize for DarkMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            DarkMode::Media => serializer.serialize_str("media"),
            DarkMode::Class => serializer.serialize_str("class"),
            DarkMode::Disabled => serializer.serialize_bool(false),
        }
    }
}

impl fmt::Display for DarkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DarkMode::Media => write!(f, "media"),
            DarkMode::Class => write!(f, "class"),
            DarkMode::Disabled => write!(f, "false"),
        }
    }
}

/// Theme customization
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
pub struct Theme {
    /// Additive design-token overrides merged onto the framework defaults
    pub extend: Map<String, Value>,
}

/// An opaque plugin reference, resolved by the build tool.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct PluginRef(String);

impl PluginRef {
    /// Wrap a plugin reference string
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The reference as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PluginRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PluginRef {
    fn from(reference: &str) -> Self {
        Self::new(reference)
    }
}

impl ConfigDocument {
    /// Validate a raw configuration value, ignoring unrecognized
    /// top-level keys.
    ///
    /// Pure and single-pass: the first violated constraint fails the
    /// whole load. Optional fields absent from `raw` take their
    /// documented defaults.
    pub fn from_raw(raw: &Value) -> Result<Self> {
        Self::from_raw_inner(raw, UnknownKeys::Ignore)
    }

    /// Validate a raw configuration value, rejecting unrecognized
    /// top-level keys with [`crate::error::ErrorCode::UnknownField`].
    pub fn from_raw_strict(raw: &Value) -> Result<Self> {
        Self::from_raw_inner(raw, UnknownKeys::Reject)
    }

    fn from_raw_inner(raw: &Value, unknown_keys: UnknownKeys) -> Result<Self> {
        let root = raw
            .as_object()
            .ok_or_else(|| Error::schema_violation("<root>", "a configuration object", json_type(raw)))?;

        let content = parse_content(root)?;
        let dark_mode = parse_dark_mode(root)?;
        let theme = parse_theme(root)?;
        let plugins = parse_plugins(root)?;

        if unknown_keys == UnknownKeys::Reject {
            if let Some(key) = root.keys().find(|k| !KNOWN_KEYS.contains(&k.as_str())) {
                return Err(Error::unknown_field(key));
            }
        }

        Ok(Self {
            content,
            dark_mode,
            theme,
            plugins,
        })
    }

    /// Diagnose content patterns that do not parse as globs.
    ///
    /// Scanning belongs to the build tool; this only catches syntax
    /// typos (unbalanced braces and the like) at load time. Returns one
    /// warning line per unparsable pattern.
    pub fn content_warnings(&self) -> Vec<String> {
        self.content
            .iter()
            .filter_map(|pattern| {
                glob::Pattern::new(pattern)
                    .err()
                    .map(|e| format!("content pattern `{}` is not a valid glob: {}", pattern, e))
            })
            .collect()
    }
}

/// Strict-mode switch for unrecognized top-level keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnknownKeys {
    Ignore,
    Reject,
}

fn parse_content(root: &Map<String, Value>) -> Result<Vec<String>> {
    let value = root.get("content").ok_or_else(|| {
        Error::schema_violation("content", "a non-empty array of glob strings", "nothing")
            .with_suggestion("Add a content array listing the files to scan, e.g. [\"./src/**/*.html\"]")
    })?;

    let items = value
        .as_array()
        .ok_or_else(|| Error::schema_violation("content", "an array of glob strings", json_type(value)))?;

    if items.is_empty() {
        return Err(Error::empty_content_set());
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let field = format!("content[{}]", index);
            let pattern = item
                .as_str()
                .ok_or_else(|| Error::schema_violation(&field, "a glob string", json_type(item)))?;
            if pattern.is_empty() {
                return Err(Error::schema_violation(&field, "a non-empty glob string", "\"\""));
            }
            Ok(pattern.to_string())
        })
        .collect()
}

fn parse_dark_mode(root: &Map<String, Value>) -> Result<DarkMode> {
    match root.get("darkMode") {
        None => Ok(DarkMode::default()),
        Some(Value::Bool(false)) => Ok(DarkMode::Disabled),
        Some(Value::String(s)) if s == "media" => Ok(DarkMode::Media),
        Some(Value::String(s)) if s == "class" => Ok(DarkMode::Class),
        Some(other) => Err(Error::schema_violation(
            "darkMode",
            "one of \"media\", \"class\", or false",
            display_value(other),
        )),
    }
}

fn parse_theme(root: &Map<String, Value>) -> Result<Theme> {
    let Some(value) = root.get("theme") else {
        return Ok(Theme::default());
    };

    let theme = value
        .as_object()
        .ok_or_else(|| Error::schema_violation("theme", "a mapping", json_type(value)))?;

    let extend = match theme.get("extend") {
        None => Map::new(),
        Some(extend) => extend
            .as_object()
            .cloned()
            .ok_or_else(|| Error::schema_violation("theme.extend", "a mapping", json_type(extend)))?,
    };

    Ok(Theme { extend })
}

fn parse_plugins(root: &Map<String, Value>) -> Result<Vec<PluginRef>> {
    let Some(value) = root.get("plugins") else {
        return Ok(Vec::new());
    };

    let items = value
        .as_array()
        .ok_or_else(|| Error::schema_violation("plugins", "an array of plugin references", json_type(value)))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str().map(PluginRef::new).ok_or_else(|| {
                Error::schema_violation(
                    format!("plugins[{}]", index),
                    "a plugin reference string",
                    json_type(item),
                )
            })
        })
        .collect()
}

/// JSON type name for error messages
fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}

/// Short rendering of a scalar for error messages
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        Value::Bool(b) => b.to_string(),
        other => json_type(other).to_string(),
    }
}
