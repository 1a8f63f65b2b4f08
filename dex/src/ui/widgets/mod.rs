//! TUI widgets for the catalog browser

pub mod controls;
pub mod entity_card;
pub mod stat_bars;
pub mod status_bar;
pub mod type_badges;

pub use controls::ControlsWidget;
pub use entity_card::EntityCardWidget;
pub use stat_bars::StatBarsWidget;
pub use status_bar::{HotkeyBarWidget, StatusBarWidget};
pub use type_badges::badge_line;
