use memo_palette::filters::FilterStore;
use memo_palette::gui::PaletteApp;
use memo_palette::memos::{load_memos, FileBackend, MemoStore};
use memo_palette::nav::{self, ActiveView};
use memo_palette::palette::Palette;
use memo_palette::settings::{config_dir, Settings};
use memo_palette::logging;
use memo_palette::tags::{collect_tags, TagStore};

use eframe::egui;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let settings_path = dir.join("settings.json");
    let settings = Settings::load(&settings_path.to_string_lossy())?;
    if !settings_path.exists() {
        settings.save(&settings_path.to_string_lossy())?;
    }
    logging::init(settings.debug_logging);

    let memo_file = settings.memo_file();
    let memos = MemoStore::new(
        Arc::new(FileBackend::new(memo_file.clone())),
        settings.snippet_width,
    );

    let tags = TagStore::new();
    match load_memos(&memo_file) {
        Ok(records) => tags.set_counts(collect_tags(&records)),
        Err(e) => tracing::warn!("failed to read memo file for tags: {e}"),
    }

    let destinations = match &settings.nav_file {
        Some(path) => nav::load_nav_entries(path).unwrap_or_else(|e| {
            tracing::warn!("failed to load nav entries from {path}: {e}");
            nav::builtin_entries()
        }),
        None => nav::builtin_entries(),
    };

    let filters = FilterStore::new();
    let view = Arc::new(ActiveView::default());

    let palette = Palette::new(
        destinations,
        memos.clone(),
        tags.clone(),
        filters.clone(),
        view.clone(),
        settings.recent_limit,
    );
    let shortcut = settings.shortcut();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 480.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Memo Palette",
        native_options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            let subscriptions = vec![
                memos.subscribe({
                    let ctx = ctx.clone();
                    move || ctx.request_repaint()
                }),
                tags.subscribe({
                    let ctx = ctx.clone();
                    move || ctx.request_repaint()
                }),
                filters.subscribe(move || ctx.request_repaint()),
            ];
            Box::new(PaletteApp::new(
                palette,
                shortcut,
                view,
                filters.clone(),
                subscriptions,
            ))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to start UI: {e}"))?;

    Ok(())
}
