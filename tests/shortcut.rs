use eframe::egui;
use memo_palette::shortcut::{parse_shortcut, Shortcut};

#[test]
fn parse_default_palette_shortcut() {
    let sc = parse_shortcut("Ctrl+K").expect("should parse Ctrl+K");
    assert_eq!(sc.key, egui::Key::K);
    assert!(sc.ctrl && !sc.shift && !sc.alt);
    assert_eq!(sc, Shortcut::default());
}

#[test]
fn parse_multi_modifier_combo() {
    let sc = parse_shortcut("Ctrl+Shift+P").expect("should parse combination");
    assert_eq!(sc.key, egui::Key::P);
    assert!(sc.ctrl && sc.shift && !sc.alt);
}

#[test]
fn parse_function_and_digit_keys() {
    let sc = parse_shortcut("F2").expect("should parse F2");
    assert_eq!(sc.key, egui::Key::F2);
    assert!(!sc.ctrl && !sc.shift && !sc.alt);

    let sc = parse_shortcut("Alt+3").expect("should parse Alt+3");
    assert_eq!(sc.key, egui::Key::Num3);
    assert!(sc.alt);
}

#[test]
fn parse_is_case_insensitive() {
    let sc = parse_shortcut("ctrl+k").expect("should parse lowercase");
    assert_eq!(sc, Shortcut::default());
}

#[test]
fn parse_invalid_shortcut() {
    assert!(parse_shortcut("Ctrl+Foo").is_none());
    assert!(parse_shortcut("Ctrl+Shift").is_none());
    assert!(parse_shortcut("").is_none());
}
