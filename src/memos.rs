use crate::subscription::{SubscriberSet, Subscription};
use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoScope {
    Root,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoStatus {
    Active,
    Archived,
}

impl Default for MemoStatus {
    fn default() -> Self {
        MemoStatus::Active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoOrder {
    UpdatedDesc,
}

/// Parameters of a recent-memos fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoFilter {
    pub scope: MemoScope,
    pub status: MemoStatus,
    pub order: MemoOrder,
    pub limit: usize,
}

impl MemoFilter {
    /// The canonical filter the palette uses: root scope, active memos,
    /// newest first.
    pub fn recent(limit: usize) -> Self {
        Self {
            scope: MemoScope::Root,
            status: MemoStatus::Active,
            order: MemoOrder::UpdatedDesc,
            limit,
        }
    }
}

/// A memo as stored on disk.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MemoRecord {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub status: MemoStatus,
    pub updated_ts: i64,
}

/// The projection of a memo the palette renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memo {
    pub id: String,
    pub snippet: String,
    pub updated_ts: i64,
}

/// First line of `text`, truncated to `width` characters with an ellipsis.
pub fn snippet(text: &str, width: usize) -> String {
    let line = text.lines().next().unwrap_or("");
    let mut out: String = line.chars().take(width).collect();
    if line.chars().count() > width {
        out.push('…');
    }
    out
}

/// Human readable update time, empty for out-of-range timestamps.
pub fn format_ts(ts: i64) -> String {
    Local
        .timestamp_opt(ts, 0)
        .single()
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

pub fn load_memos(path: &Path) -> anyhow::Result<Vec<MemoRecord>> {
    let content = std::fs::read_to_string(path).unwrap_or_default();
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let list: Vec<MemoRecord> = serde_json::from_str(&content)?;
    Ok(list)
}

pub fn save_memos(path: &Path, memos: &[MemoRecord]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(memos)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Source the recent-memos fetch reads from.
pub trait MemoBackend: Send + Sync {
    fn fetch_recent(&self, filter: &MemoFilter) -> anyhow::Result<Vec<MemoRecord>>;
}

/// Backend reading memos from a local JSON file.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl MemoBackend for FileBackend {
    fn fetch_recent(&self, filter: &MemoFilter) -> anyhow::Result<Vec<MemoRecord>> {
        let mut list = load_memos(&self.path)?;
        list.retain(|m| m.status == filter.status);
        match filter.order {
            MemoOrder::UpdatedDesc => list.sort_by_key(|m| std::cmp::Reverse(m.updated_ts)),
        }
        list.truncate(filter.limit);
        Ok(list)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    InFlight,
    Loaded,
}

struct Inner {
    recent: Vec<Memo>,
    state: FetchState,
    generation: u64,
}

/// Observable store of recently updated memos.
///
/// The fetch runs on a worker thread and commits through a generation
/// check: [`MemoStore::cancel_pending`] bumps the generation, so a result
/// arriving after cancellation is discarded without touching the snapshot.
#[derive(Clone)]
pub struct MemoStore {
    inner: Arc<Mutex<Inner>>,
    backend: Arc<dyn MemoBackend>,
    subscribers: Arc<SubscriberSet>,
    snippet_width: usize,
}

impl MemoStore {
    pub fn new(backend: Arc<dyn MemoBackend>, snippet_width: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                recent: Vec::new(),
                state: FetchState::Idle,
                generation: 0,
            })),
            backend,
            subscribers: Arc::new(SubscriberSet::new()),
            snippet_width,
        }
    }

    /// Snapshot of the current recent-memos list.
    pub fn recent(&self) -> Vec<Memo> {
        self.inner.lock().unwrap().recent.clone()
    }

    pub fn fetch_state(&self) -> FetchState {
        self.inner.lock().unwrap().state
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    /// Start fetching recent memos on a worker thread. A fetch already in
    /// flight or completed is not repeated; failure is logged and otherwise
    /// treated like an empty result.
    pub fn fetch_recent(&self, filter: MemoFilter) {
        let generation = {
            let mut inner = self.inner.lock().unwrap();
            if inner.state != FetchState::Idle {
                return;
            }
            inner.state = FetchState::InFlight;
            inner.generation
        };
        tracing::debug!(?filter, "fetching recent memos");
        let store = self.clone();
        thread::spawn(move || {
            let result = store.backend.fetch_recent(&filter);
            store.commit(generation, result);
        });
    }

    /// Invalidate any in-flight fetch so its result will be discarded.
    pub fn cancel_pending(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.generation += 1;
        if inner.state == FetchState::InFlight {
            inner.state = FetchState::Idle;
        }
    }

    fn commit(&self, generation: u64, result: anyhow::Result<Vec<MemoRecord>>) {
        {
            let mut inner = self.inner.lock().unwrap();
            if inner.generation != generation {
                tracing::debug!("stale fetch result discarded");
                return;
            }
            inner.state = FetchState::Loaded;
            match result {
                Ok(records) => {
                    inner.recent = records
                        .into_iter()
                        .map(|r| Memo {
                            snippet: snippet(&r.content, self.snippet_width),
                            id: r.id,
                            updated_ts: r.updated_ts,
                        })
                        .collect();
                }
                Err(e) => {
                    // Best-effort enrichment: the group simply stays empty.
                    tracing::warn!("recent memo fetch failed: {e}");
                }
            }
        }
        self.subscribers.notify();
    }
}
