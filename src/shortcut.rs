use eframe::egui;

/// A modifier+key combination that toggles the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub key: egui::Key,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Default for Shortcut {
    fn default() -> Self {
        Self {
            key: egui::Key::K,
            ctrl: true,
            shift: false,
            alt: false,
        }
    }
}

impl Shortcut {
    pub fn modifiers(&self) -> egui::Modifiers {
        egui::Modifiers {
            ctrl: self.ctrl,
            shift: self.shift,
            alt: self.alt,
            ..Default::default()
        }
    }

    /// Check for a press of this shortcut and consume it so no other widget
    /// sees the key while the palette is mounted.
    pub fn consume_in(&self, ctx: &egui::Context) -> bool {
        ctx.input_mut(|i| i.consume_key(self.modifiers(), self.key))
    }
}

/// Parse a shortcut string like "Ctrl+K" or "Ctrl+Shift+P" into a [`Shortcut`].
pub fn parse_shortcut(s: &str) -> Option<Shortcut> {
    let mut ctrl = false;
    let mut shift = false;
    let mut alt = false;
    let mut key: Option<egui::Key> = None;

    for part in s.split('+') {
        let upper = part.trim().to_ascii_uppercase();
        match upper.as_str() {
            "CTRL" | "CONTROL" | "CMD" => ctrl = true,
            "SHIFT" => shift = true,
            "ALT" => alt = true,
            "" => {}
            _ => {
                if let Some(k) = parse_key(&upper) {
                    key = Some(k);
                } else {
                    return None;
                }
            }
        }
    }

    key.map(|k| Shortcut {
        key: k,
        ctrl,
        shift,
        alt,
    })
}

fn parse_key(upper: &str) -> Option<egui::Key> {
    use egui::Key;
    match upper {
        "SPACE" => Some(Key::Space),
        "TAB" => Some(Key::Tab),
        "ENTER" | "RETURN" => Some(Key::Enter),
        "ESC" | "ESCAPE" => Some(Key::Escape),
        "SLASH" | "/" => Some(Key::Slash),
        _ if upper.starts_with('F') && upper.len() > 1 => match upper[1..].parse::<u8>().ok() {
            Some(1) => Some(Key::F1),
            Some(2) => Some(Key::F2),
            Some(3) => Some(Key::F3),
            Some(4) => Some(Key::F4),
            Some(5) => Some(Key::F5),
            Some(6) => Some(Key::F6),
            Some(7) => Some(Key::F7),
            Some(8) => Some(Key::F8),
            Some(9) => Some(Key::F9),
            Some(10) => Some(Key::F10),
            Some(11) => Some(Key::F11),
            Some(12) => Some(Key::F12),
            _ => None,
        },
        _ if upper.len() == 1 => {
            let c = upper.chars().next()?;
            if c.is_ascii_digit() {
                Some(match c {
                    '0' => Key::Num0,
                    '1' => Key::Num1,
                    '2' => Key::Num2,
                    '3' => Key::Num3,
                    '4' => Key::Num4,
                    '5' => Key::Num5,
                    '6' => Key::Num6,
                    '7' => Key::Num7,
                    '8' => Key::Num8,
                    '9' => Key::Num9,
                    _ => return None,
                })
            } else if c.is_ascii_alphabetic() {
                Some(match c {
                    'A' => Key::A,
                    'B' => Key::B,
                    'C' => Key::C,
                    'D' => Key::D,
                    'E' => Key::E,
                    'F' => Key::F,
                    'G' => Key::G,
                    'H' => Key::H,
                    'I' => Key::I,
                    'J' => Key::J,
                    'K' => Key::K,
                    'L' => Key::L,
                    'M' => Key::M,
                    'N' => Key::N,
                    'O' => Key::O,
                    'P' => Key::P,
                    'Q' => Key::Q,
                    'R' => Key::R,
                    'S' => Key::S,
                    'T' => Key::T,
                    'U' => Key::U,
                    'V' => Key::V,
                    'W' => Key::W,
                    'X' => Key::X,
                    'Y' => Key::Y,
                    'Z' => Key::Z,
                    _ => return None,
                })
            } else {
                None
            }
        }
        _ => None,
    }
}
