use memo_palette::filters::FilterStore;
use memo_palette::memos::{MemoBackend, MemoFilter, MemoRecord, MemoStore, MemoStatus};
use memo_palette::nav::{builtin_entries, Navigator};
use memo_palette::palette::Palette;
use memo_palette::tags::TagStore;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Backend that records every fetch it receives.
pub struct RecordingBackend {
    pub calls: Mutex<Vec<MemoFilter>>,
    pub records: Vec<MemoRecord>,
    pub fail: bool,
    pub delay: Duration,
}

impl RecordingBackend {
    pub fn with_records(records: Vec<MemoRecord>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            records,
            fail: false,
            delay: Duration::ZERO,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::with_records(Vec::new())
        }
    }

    pub fn slow(records: Vec<MemoRecord>, delay: Duration) -> Self {
        Self {
            delay,
            ..Self::with_records(records)
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl MemoBackend for RecordingBackend {
    fn fetch_recent(&self, filter: &MemoFilter) -> anyhow::Result<Vec<MemoRecord>> {
        self.calls.lock().unwrap().push(*filter);
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        if self.fail {
            anyhow::bail!("backend unavailable");
        }
        Ok(self.records.clone())
    }
}

/// Navigator that records every path it is asked to visit.
#[derive(Default)]
pub struct RecordingNavigator {
    pub paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}

pub fn record(id: &str, content: &str, updated_ts: i64) -> MemoRecord {
    MemoRecord {
        id: id.to_string(),
        content: content.to_string(),
        status: MemoStatus::Active,
        updated_ts,
    }
}

pub struct Fixture {
    pub palette: Palette,
    pub backend: Arc<RecordingBackend>,
    pub navigator: Arc<RecordingNavigator>,
    pub memos: MemoStore,
    pub tags: TagStore,
    pub filters: FilterStore,
}

/// Wire a palette against recording collaborators and the built-in
/// navigation destinations.
pub fn fixture(backend: RecordingBackend) -> Fixture {
    let backend = Arc::new(backend);
    let navigator = Arc::new(RecordingNavigator::default());
    let memos = MemoStore::new(backend.clone(), 32);
    let tags = TagStore::new();
    let filters = FilterStore::new();
    let palette = Palette::new(
        builtin_entries(),
        memos.clone(),
        tags.clone(),
        filters.clone(),
        navigator.clone(),
        20,
    );
    Fixture {
        palette,
        backend,
        navigator,
        memos,
        tags,
        filters,
    }
}

/// Poll `predicate` until it holds or two seconds pass.
pub fn wait_until(predicate: impl Fn() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        if predicate() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    predicate()
}
