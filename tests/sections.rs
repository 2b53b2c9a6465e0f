#[path = "common.rs"]
mod common;

use common::{fixture, record, wait_until, RecordingBackend};
use memo_palette::memos::FetchState;
use memo_palette::palette::{PaletteEntry, NAVIGATE_TITLE, RECENT_TITLE, TAGS_TITLE};
use std::collections::HashMap;

#[test]
fn empty_recent_group_is_absent() {
    let mut fx = fixture(RecordingBackend::with_records(Vec::new()));
    fx.palette.toggle();
    assert!(wait_until(|| fx.memos.fetch_state() == FetchState::Loaded));

    let sections = fx.palette.sections();
    assert!(sections.iter().all(|s| s.title != RECENT_TITLE));
    assert!(sections.iter().all(|s| s.title != TAGS_TITLE));
    assert_eq!(sections[0].title, NAVIGATE_TITLE);
    assert_eq!(sections[0].entries.len(), 4);
}

#[test]
fn recent_group_appears_once_loaded() {
    let mut fx = fixture(RecordingBackend::with_records(vec![
        record("memos/one", "first memo", 2),
        record("memos/two", "second memo", 1),
    ]));
    fx.palette.toggle();
    assert!(wait_until(|| fx.memos.fetch_state() == FetchState::Loaded));

    let sections = fx.palette.sections();
    let recent = sections
        .iter()
        .find(|s| s.title == RECENT_TITLE)
        .expect("recent group should render");
    assert_eq!(recent.entries.len(), 2);
}

#[test]
fn tags_render_in_lexicographic_order() {
    let fx = fixture(RecordingBackend::with_records(Vec::new()));
    let mut counts = HashMap::new();
    counts.insert("b".to_string(), 1);
    counts.insert("a".to_string(), 2);
    fx.tags.set_counts(counts);

    let sections = fx.palette.sections();
    let tags = sections
        .iter()
        .find(|s| s.title == TAGS_TITLE)
        .expect("tags group should render");
    let names: Vec<&str> = tags.entries.iter().map(|e| e.label()).collect();
    assert_eq!(names, ["a", "b"]);
}

#[test]
fn query_narrows_visible_entries() {
    let mut fx = fixture(RecordingBackend::with_records(Vec::new()));
    fx.palette.query = "reso".into();

    let sections = fx.palette.sections();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, NAVIGATE_TITLE);
    match &sections[0].entries[..] {
        [PaletteEntry::Destination(e)] => assert_eq!(e.path, "/resources"),
        other => panic!("unexpected entries: {other:?}"),
    }
}

#[test]
fn no_match_renders_no_groups() {
    let fx = {
        let mut fx = fixture(RecordingBackend::with_records(Vec::new()));
        fx.palette.query = "zzzzzz".into();
        fx
    };
    assert!(fx.palette.sections().is_empty());
}
