#[path = "common.rs"]
mod common;

use common::{fixture, RecordingBackend};

#[test]
fn shortcut_toggles_open_and_closed() {
    let mut fx = fixture(RecordingBackend::with_records(Vec::new()));
    assert!(!fx.palette.is_open());

    fx.palette.toggle();
    assert!(fx.palette.is_open());

    fx.palette.toggle();
    assert!(!fx.palette.is_open());
}

#[test]
fn close_is_noop_while_closed() {
    let mut fx = fixture(RecordingBackend::with_records(Vec::new()));
    fx.palette.close();
    assert!(!fx.palette.is_open());

    fx.palette.toggle();
    fx.palette.close();
    assert!(!fx.palette.is_open());
    // closing again changes nothing
    fx.palette.close();
    assert!(!fx.palette.is_open());
}

#[test]
fn query_is_cleared_on_close() {
    let mut fx = fixture(RecordingBackend::with_records(Vec::new()));
    fx.palette.toggle();
    fx.palette.query = "work".into();
    fx.palette.close();
    fx.palette.toggle();
    assert!(fx.palette.query.is_empty());
}
