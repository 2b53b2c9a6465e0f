use crate::filters::FilterStore;
use crate::memos::format_ts;
use crate::nav::ActiveView;
use crate::palette::{Palette, PaletteEntry};
use crate::shortcut::Shortcut;
use crate::subscription::Subscription;
use eframe::egui;
use std::sync::Arc;

/// The demo shell: a minimal "active view" display with the palette
/// overlaid on top.
pub struct PaletteApp {
    palette: Palette,
    shortcut: Shortcut,
    view: Arc<ActiveView>,
    filters: FilterStore,
    // Held so store mutations keep triggering repaints until the app drops.
    _subscriptions: Vec<Subscription>,
}

impl PaletteApp {
    pub fn new(
        palette: Palette,
        shortcut: Shortcut,
        view: Arc<ActiveView>,
        filters: FilterStore,
        subscriptions: Vec<Subscription>,
    ) -> Self {
        Self {
            palette,
            shortcut,
            view,
            filters,
            _subscriptions: subscriptions,
        }
    }

    fn palette_window(&mut self, ctx: &egui::Context) {
        let mut selected: Option<PaletteEntry> = None;

        egui::Window::new("palette")
            .title_bar(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_TOP, [0.0, 80.0])
            .fixed_size([420.0, 320.0])
            .show(ctx, |ui| {
                let input = ui.add(
                    egui::TextEdit::singleline(&mut self.palette.query)
                        .hint_text("Type to search…")
                        .desired_width(f32::INFINITY),
                );
                input.request_focus();

                egui::ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
                    for section in self.palette.sections() {
                        ui.label(egui::RichText::new(section.title).small().weak());
                        for entry in &section.entries {
                            let mut button = ui.button(entry.label());
                            if let PaletteEntry::Memo(m) = entry {
                                button = button.on_hover_text(format_ts(m.updated_ts));
                            }
                            if button.clicked() {
                                selected = Some(entry.clone());
                            }
                        }
                        ui.separator();
                    }
                });
            });

        if let Some(entry) = selected {
            self.palette.activate(&entry);
        }
    }
}

impl eframe::App for PaletteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.shortcut.consume_in(ctx) {
            self.palette.toggle();
        }
        if self.palette.is_open()
            && ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Escape))
        {
            self.palette.close();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Memos");
            ui.label(format!("Active view: {}", self.view.current()));

            let constraints = self.filters.snapshot();
            if !constraints.is_empty() {
                ui.horizontal_wrapped(|ui| {
                    ui.label("Filters:");
                    for c in &constraints {
                        if ui.button(format!("#{} ✕", c.value)).clicked() {
                            self.filters.remove(c);
                        }
                    }
                });
            }

            ui.separator();
            ui.weak("Press the palette shortcut to search memos, tags and views.");
        });

        if self.palette.is_open() {
            self.palette_window(ctx);
        }
    }
}
