use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Site layout configuration, read from `sitegen.toml` in the site root.
///
/// Paths are relative to the site root. Every field has a default, so a
/// missing or partial file still yields a usable layout.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Directory of Markdown sources.
    pub content: String,
    /// Directory of static assets copied verbatim into the output.
    pub assets: String,
    /// Directory the site is built into.
    pub output: String,
    /// HTML template wrapped around every generated page.
    pub template: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content: "content".to_string(),
            assets: "static".to_string(),
            output: "public".to_string(),
            template: "template.html".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file, or fall back to defaults when the
    /// file is missing or unreadable.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load(Path::new("/nonexistent/sitegen.toml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitegen.toml");
        fs::write(&path, "content = \"docs\"\noutput = \"dist\"\n").unwrap();

        let config = Config::load(&path);
        assert_eq!(config.content, "docs");
        assert_eq!(config.output, "dist");
        assert_eq!(config.assets, "static");
        assert_eq!(config.template, "template.html");
    }

    #[test]
    fn unparseable_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitegen.toml");
        fs::write(&path, "not valid toml [[[").unwrap();

        assert_eq!(Config::load(&path), Config::default());
    }
}
