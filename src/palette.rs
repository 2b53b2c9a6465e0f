use crate::filters::{Constraint, FilterStore};
use crate::memos::{Memo, MemoFilter, MemoStore};
use crate::nav::{detail_path, NavEntry, Navigator};
use crate::tags::TagStore;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::sync::Arc;

/// One selectable row of the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteEntry {
    Destination(NavEntry),
    Memo(Memo),
    Tag(String),
}

impl PaletteEntry {
    /// Text shown for the entry and matched against the query.
    pub fn label(&self) -> &str {
        match self {
            PaletteEntry::Destination(e) => &e.label,
            PaletteEntry::Memo(m) => &m.snippet,
            PaletteEntry::Tag(t) => t,
        }
    }
}

/// A rendered option group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub entries: Vec<PaletteEntry>,
}

pub const NAVIGATE_TITLE: &str = "Navigate";
pub const RECENT_TITLE: &str = "Recent Memos";
pub const TAGS_TITLE: &str = "Tags";

/// The command palette. Rendering is left to the caller; this type owns the
/// open/closed state, the fetch-once guard, the query, and selection
/// dispatch.
pub struct Palette {
    open: bool,
    fetched: bool,
    pub query: String,
    destinations: Vec<NavEntry>,
    matcher: SkimMatcherV2,
    memos: MemoStore,
    tags: TagStore,
    filters: FilterStore,
    navigator: Arc<dyn Navigator>,
    recent_limit: usize,
}

impl Palette {
    pub fn new(
        destinations: Vec<NavEntry>,
        memos: MemoStore,
        tags: TagStore,
        filters: FilterStore,
        navigator: Arc<dyn Navigator>,
        recent_limit: usize,
    ) -> Self {
        Self {
            open: false,
            fetched: false,
            query: String::new(),
            destinations,
            matcher: SkimMatcherV2::default(),
            memos,
            tags,
            filters,
            navigator,
            recent_limit,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle the overlay. The first closed→open transition issues the one
    /// recent-memos fetch of this palette's lifetime.
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
            return;
        }
        self.open = true;
        tracing::debug!("palette opened");
        if !self.fetched {
            self.fetched = true;
            self.memos.fetch_recent(MemoFilter::recent(self.recent_limit));
        }
    }

    /// Close the overlay. A no-op while already closed.
    pub fn close(&mut self) {
        if self.open {
            self.open = false;
            self.query.clear();
            tracing::debug!("palette closed");
        }
    }

    /// Perform the single side effect of a selection and close the overlay.
    pub fn activate(&mut self, entry: &PaletteEntry) {
        match entry {
            PaletteEntry::Destination(e) => {
                self.navigator.navigate_to(&e.path);
            }
            PaletteEntry::Memo(m) => {
                self.navigator.navigate_to(&detail_path(&m.id));
            }
            PaletteEntry::Tag(t) => {
                self.filters.add(Constraint::tag(t.clone()));
            }
        }
        self.close();
    }

    /// Build the visible option groups for the current query. Empty groups
    /// are omitted rather than rendered empty.
    pub fn sections(&self) -> Vec<Section> {
        let mut sections = Vec::new();

        let navigate: Vec<PaletteEntry> = self
            .destinations
            .iter()
            .cloned()
            .map(PaletteEntry::Destination)
            .filter(|e| self.matches(e))
            .collect();
        if !navigate.is_empty() {
            sections.push(Section {
                title: NAVIGATE_TITLE,
                entries: navigate,
            });
        }

        let recent: Vec<PaletteEntry> = self
            .memos
            .recent()
            .into_iter()
            .map(PaletteEntry::Memo)
            .filter(|e| self.matches(e))
            .collect();
        if !recent.is_empty() {
            sections.push(Section {
                title: RECENT_TITLE,
                entries: recent,
            });
        }

        let tags: Vec<PaletteEntry> = self
            .tags
            .sorted_names()
            .into_iter()
            .map(PaletteEntry::Tag)
            .filter(|e| self.matches(e))
            .collect();
        if !tags.is_empty() {
            sections.push(Section {
                title: TAGS_TITLE,
                entries: tags,
            });
        }

        sections
    }

    fn matches(&self, entry: &PaletteEntry) -> bool {
        self.query.is_empty() || self.matcher.fuzzy_match(entry.label(), &self.query).is_some()
    }
}

impl Drop for Palette {
    fn drop(&mut self) {
        // A fetch still in flight when the palette is disposed must not
        // write into the store afterwards.
        self.memos.cancel_pending();
    }
}
