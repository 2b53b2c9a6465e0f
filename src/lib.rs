pub mod filters;
pub mod gui;
pub mod logging;
pub mod memos;
pub mod nav;
pub mod palette;
pub mod settings;
pub mod shortcut;
pub mod subscription;
pub mod tags;
