use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Imperative navigation service. The palette only ever calls
/// [`Navigator::navigate_to`] and never inspects the outcome.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, path: &str);
}

/// A static destination shown in the "Navigate" group.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub label: String,
    pub path: String,
}

static BUILTIN_ENTRIES: Lazy<Vec<NavEntry>> = Lazy::new(|| {
    [
        ("Home", "/"),
        ("Resources", "/resources"),
        ("Archived", "/archived"),
        ("Settings", "/setting"),
    ]
    .iter()
    .map(|(label, path)| NavEntry {
        label: (*label).into(),
        path: (*path).into(),
    })
    .collect()
});

/// The built-in navigation destinations.
pub fn builtin_entries() -> Vec<NavEntry> {
    BUILTIN_ENTRIES.clone()
}

pub fn load_nav_entries(path: &str) -> anyhow::Result<Vec<NavEntry>> {
    let content = std::fs::read_to_string(path)?;
    let entries: Vec<NavEntry> = serde_json::from_str(&content)?;
    Ok(entries)
}

pub fn save_nav_entries(path: &str, entries: &[NavEntry]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(entries)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Detail path for a memo, derived from the trailing segment of its
/// identifier: `memos/abc123` becomes `/m/abc123`.
pub fn detail_path(memo_id: &str) -> String {
    let segment = memo_id.rsplit('/').next().unwrap_or(memo_id);
    format!("/m/{segment}")
}

/// Navigator that records the active view path; the demo shell renders it.
#[derive(Default)]
pub struct ActiveView {
    current: Mutex<String>,
}

impl ActiveView {
    pub fn current(&self) -> String {
        self.current.lock().unwrap().clone()
    }
}

impl Navigator for ActiveView {
    fn navigate_to(&self, path: &str) {
        tracing::info!(path, "navigate");
        *self.current.lock().unwrap() = path.to_string();
    }
}
