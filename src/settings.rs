use crate::shortcut::{parse_shortcut, Shortcut};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// Shortcut that toggles the palette. If the string does not parse the
    /// default of `Ctrl+K` is used.
    pub shortcut: Option<String>,
    /// Maximum number of recently updated memos fetched when the palette
    /// first opens.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    /// Display width (in characters) memos are truncated to in the list.
    #[serde(default = "default_snippet_width")]
    pub snippet_width: usize,
    /// Path of the memo file the demo backend reads from. If `None`, a file
    /// next to the settings file is used.
    pub memo_file: Option<String>,
    /// Path of the navigation destinations file. If `None`, the built-in
    /// destinations are used.
    pub nav_file: Option<String>,
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
}

fn default_recent_limit() -> usize {
    20
}

fn default_snippet_width() -> usize {
    32
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shortcut: Some("Ctrl+K".into()),
            recent_limit: default_recent_limit(),
            snippet_width: default_snippet_width(),
            memo_file: None,
            nav_file: None,
            debug_logging: false,
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn shortcut(&self) -> Shortcut {
        if let Some(s) = &self.shortcut {
            match parse_shortcut(s) {
                Some(sc) => return sc,
                None => {
                    tracing::warn!(
                        "provided shortcut string '{}' is invalid; using default Ctrl+K",
                        s
                    );
                }
            }
        }
        Shortcut::default()
    }

    /// Resolve the memo file path, defaulting to `memos.json` in the
    /// application config directory.
    pub fn memo_file(&self) -> PathBuf {
        match &self.memo_file {
            Some(p) => PathBuf::from(p),
            None => config_dir().join("memos.json"),
        }
    }
}

/// Directory used for the settings and data files.
pub fn config_dir() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("memo_palette")
}
