//! UI module for the catalog TUI

pub mod layout;
pub mod render;
pub mod theme;
pub mod widgets;
