//! Configuration file loading

use super::schema::ConfigDocument;
use crate::error::{Error, Result, ResultExt};
use std::path::{Path, PathBuf};

/// File names searched, in order, when no explicit path is given
pub const CONFIG_CANDIDATES: [&str; 3] = ["weft.config.json", ".weftrc.json", ".config/weft.json"];

/// A validated configuration together with its on-disk origin.
#[derive(Debug, Clone)]
pub struct Config {
    /// The validated document with defaults applied
    pub document: ConfigDocument,
    /// Path the document was read from
    pub path: PathBuf,
    strict: bool,
}

impl Config {
    /// Load configuration from an explicit path, or search the
    /// standard candidate names in the current directory.
    pub fn load(path: Option<&str>) -> Result<Self> {
        Self::load_with(path, false)
    }

    /// Like [`Config::load`], but unrecognized top-level keys fail the load.
    pub fn load_strict(path: Option<&str>) -> Result<Self> {
        Self::load_with(path, true)
    }

    fn load_with(path: Option<&str>, strict: bool) -> Result<Self> {
        match path {
            Some(p) => Self::load_file(Path::new(p), strict),
            None => Self::discover_in(Path::new("."), strict),
        }
    }

    /// Search `dir` for a candidate config file and load the first hit.
    pub fn discover_in(dir: &Path, strict: bool) -> Result<Self> {
        let path = find_config_file(dir).ok_or_else(|| {
            Error::config_not_found(dir.join(CONFIG_CANDIDATES[0]))
                .with_context(format!("searched for {}", CONFIG_CANDIDATES.join(", ")))
        })?;
        Self::load_file(&path, strict)
    }

    /// Re-read the document from its original path.
    ///
    /// Supports the host's reload cycle: a failed reload leaves the
    /// current document untouched.
    pub fn reload(&self) -> Result<Self> {
        tracing::debug!(path = %self.path.display(), "reloading configuration");
        Self::load_file(&self.path, self.strict)
    }

    fn load_file(path: &Path, strict: bool) -> Result<Self> {
        let document = load_config_file(path, strict)?;
        tracing::debug!(
            path = %path.display(),
            patterns = document.content.len(),
            plugins = document.plugins.len(),
            "configuration loaded"
        );
        Ok(Self {
            document,
            path: path.to_path_buf(),
            strict,
        })
    }
}

/// Find a configuration file among the standard candidates
fn find_config_file(dir: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|candidate| dir.join(candidate))
        .find(|path| path.is_file())
}

/// Read and validate a JSON configuration file
fn load_config_file(path: &Path, strict: bool) -> Result<ConfigDocument> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::config_not_found(path));
        }
        Err(e) => {
            return Err(Error::from(e).with_context(format!("reading {}", path.display())));
        }
    };

    let raw: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| Error::from(e).with_context(format!("in {}", path.display())))?;

    let result = if strict {
        ConfigDocument::from_raw_strict(&raw)
    } else {
        ConfigDocument::from_raw(&raw)
    };
    result.context(format!("in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::fs;

    fn write_config(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "weft.config.json", r#"{"content": ["./src/**/*.html"]}"#);

        let config = Config::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.document.content, vec!["./src/**/*.html"]);
        assert_eq!(config.path, path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Some("/nonexistent/weft.config.json")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigNotFound);
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "weft.config.json", "{not json");

        let err = Config::load(Some(path.to_str().unwrap())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigParseError);
    }

    #[test]
    fn test_schema_error_carries_file_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "weft.config.json", r#"{"content": []}"#);

        let err = Config::load(Some(path.to_str().unwrap())).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyContentSet);
        assert!(err.context.as_deref().unwrap().contains("weft.config.json"));
    }

    #[test]
    fn test_discover_prefers_first_candidate() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), ".weftrc.json", r#"{"content": ["rc"]}"#);
        write_config(dir.path(), "weft.config.json", r#"{"content": ["main"]}"#);

        let config = Config::discover_in(dir.path(), false).unwrap();
        assert_eq!(config.document.content, vec!["main"]);
    }

    #[test]
    fn test_discover_falls_back_to_dotfile() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), ".config/weft.json", r#"{"content": ["nested"]}"#);

        let config = Config::discover_in(dir.path(), false).unwrap();
        assert_eq!(config.document.content, vec!["nested"]);
    }

    #[test]
    fn test_discover_nothing_found() {
        let dir = tempfile::tempdir().unwrap();

        let err = Config::discover_in(dir.path(), false).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigNotFound);
    }

    #[test]
    fn test_strict_mode_rejects_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "weft.config.json",
            r#"{"content": ["a"], "corePlugins": {}}"#,
        );

        assert!(Config::load(Some(path.to_str().unwrap())).is_ok());

        let err = Config::load_strict(Some(path.to_str().unwrap())).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownField);
    }

    #[test]
    fn test_reload_picks_up_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "weft.config.json", r#"{"content": ["a"]}"#);

        let config = Config::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.document.dark_mode.to_string(), "false");

        write_config(
            dir.path(),
            "weft.config.json",
            r#"{"content": ["a"], "darkMode": "class"}"#,
        );

        let reloaded = config.reload().unwrap();
        assert_eq!(reloaded.document.dark_mode.to_string(), "class");
    }

    #[test]
    fn test_failed_reload_leaves_original_usable() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "weft.config.json", r#"{"content": ["a"]}"#);

        let config = Config::load(Some(path.to_str().unwrap())).unwrap();
        write_config(dir.path(), "weft.config.json", r#"{"content": []}"#);

        assert!(config.reload().is_err());
        assert_eq!(config.document.content, vec!["a"]);
    }
}
