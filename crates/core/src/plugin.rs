//! Plugin seam for the build tool
//!
//! The loader treats `plugins` entries as opaque references; this
//! module defines the transform contract those references resolve to.
//! Resolution and execution belong to the build tool.

use std::fmt;

/// Generated CSS text passed through the plugin chain.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stylesheet(String);

impl Stylesheet {
    /// Wrap generated CSS text
    pub fn new(css: impl Into<String>) -> Self {
        Self(css.into())
    }

    /// The CSS text as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the CSS text
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Stylesheet {
    fn from(css: &str) -> Self {
        Self::new(css)
    }
}

/// An ordered, composable transform over a generated stylesheet.
///
/// Later plugins see earlier plugins' output, so activation order from
/// the configuration is significant.
pub trait Plugin {
    /// Reference name matching the `plugins` entry that activates it
    fn name(&self) -> &str;

    /// Transform the stylesheet, returning the replacement
    fn apply(&self, stylesheet: Stylesheet) -> Stylesheet;
}

/// Fold a stylesheet through a plugin chain in activation order.
pub fn apply_chain(plugins: &[Box<dyn Plugin>], stylesheet: Stylesheet) -> Stylesheet {
    plugins
        .iter()
        .fold(stylesheet, |sheet, plugin| plugin.apply(sheet))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Suffixer {
        name: String,
        suffix: String,
    }

    impl Suffixer {
        fn boxed(name: &str, suffix: &str) -> Box<dyn Plugin> {
            Box::new(Self {
                name: name.to_string(),
                suffix: suffix.to_string(),
            })
        }
    }

    impl Plugin for Suffixer {
        fn name(&self) -> &str {
            &self.name
        }

        fn apply(&self, stylesheet: Stylesheet) -> Stylesheet {
            Stylesheet::new(format!("{}{}", stylesheet.as_str(), self.suffix))
        }
    }

    #[test]
    fn test_chain_applies_in_order() {
        let plugins = vec![Suffixer::boxed("one", "-1"), Suffixer::boxed("two", "-2")];

        let out = apply_chain(&plugins, Stylesheet::from("base"));
        assert_eq!(out.as_str(), "base-1-2");
    }

    #[test]
    fn test_empty_chain_is_identity() {
        let out = apply_chain(&[], Stylesheet::from(".a{}"));
        assert_eq!(out.as_str(), ".a{}");
    }

    #[test]
    fn test_plugin_reports_name() {
        let plugin = Suffixer::boxed("@weft/typography", "");
        assert_eq!(plugin.name(), "@weft/typography");
    }
}
