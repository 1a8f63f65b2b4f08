//! Color theme and styling for the catalog TUI

use ratatui::style::{Color, Modifier, Style};

use dex_core::AttributeKind;

/// Catalog UI color theme
#[derive(Debug, Clone)]
pub struct DexTheme {
    // Base colors
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,
    pub accent: Color,

    // Cycle state
    pub loading: Color,
    pub error: Color,
    pub system_text: Color,

    // Bars
    pub bar_low: Color,
    pub bar_mid: Color,
    pub bar_high: Color,
    pub bar_overflow: Color,
    pub bar_track: Color,
}

impl Default for DexTheme {
    fn default() -> Self {
        Self {
            foreground: Color::White,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            accent: Color::LightRed,

            loading: Color::Yellow,
            error: Color::Red,
            system_text: Color::DarkGray,

            bar_low: Color::Red,
            bar_mid: Color::Yellow,
            bar_high: Color::Green,
            bar_overflow: Color::LightCyan,
            bar_track: Color::Black,
        }
    }
}

impl DexTheme {
    /// Style for the creature name, which doubles as the loading/error slot
    pub fn name_style(&self, loading: bool, error: bool) -> Style {
        let color = if error {
            self.error
        } else if loading {
            self.loading
        } else {
            self.foreground
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Style for the `#0001` identifier
    pub fn identifier_style(&self) -> Style {
        Style::default()
            .fg(self.system_text)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for system messages
    pub fn system_style(&self) -> Style {
        Style::default()
            .fg(self.system_text)
            .add_modifier(Modifier::DIM)
    }

    /// Get border style
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }

    /// Badge style from a `type-<name>` style key
    pub fn badge_style(&self, style_key: &str) -> Style {
        let category = style_key.strip_prefix("type-").unwrap_or(style_key);
        Style::default()
            .fg(Color::Black)
            .bg(category_color(category))
            .add_modifier(Modifier::BOLD)
    }

    /// Bar color from the rendered width
    pub fn bar_color(&self, width_percent: f64) -> Color {
        if width_percent > 100.0 {
            self.bar_overflow
        } else if width_percent >= 60.0 {
            self.bar_high
        } else if width_percent >= 33.0 {
            self.bar_mid
        } else {
            self.bar_low
        }
    }

    /// Label color per attribute
    pub fn attribute_style(&self, kind: AttributeKind) -> Style {
        let color = match kind {
            AttributeKind::Hp => Color::LightGreen,
            AttributeKind::Attack => Color::LightRed,
            AttributeKind::Defense => Color::LightYellow,
            AttributeKind::SpecialAttack => Color::LightBlue,
            AttributeKind::SpecialDefense => Color::LightMagenta,
            AttributeKind::Speed => Color::LightCyan,
        };
        Style::default().fg(color)
    }

    /// Button style; pressed while a fetch is outstanding
    pub fn button_style(&self, busy: bool) -> Style {
        if busy {
            Style::default().fg(self.system_text)
        } else {
            Style::default()
                .fg(self.foreground)
                .add_modifier(Modifier::BOLD)
        }
    }
}

/// Background color for a category badge. Unknown categories are gray.
pub fn category_color(category: &str) -> Color {
    match category {
        "normal" => Color::Rgb(168, 168, 120),
        "fire" => Color::Rgb(240, 128, 48),
        "water" => Color::Rgb(104, 144, 240),
        "electric" => Color::Rgb(248, 208, 48),
        "grass" => Color::Rgb(120, 200, 80),
        "ice" => Color::Rgb(152, 216, 216),
        "fighting" => Color::Rgb(192, 48, 40),
        "poison" => Color::Rgb(160, 64, 160),
        "ground" => Color::Rgb(224, 192, 104),
        "flying" => Color::Rgb(168, 144, 240),
        "psychic" => Color::Rgb(248, 88, 136),
        "bug" => Color::Rgb(168, 184, 32),
        "rock" => Color::Rgb(184, 160, 56),
        "ghost" => Color::Rgb(112, 88, 152),
        "dragon" => Color::Rgb(112, 56, 248),
        "dark" => Color::Rgb(112, 88, 72),
        "steel" => Color::Rgb(184, 184, 208),
        "fairy" => Color::Rgb(238, 153, 172),
        _ => Color::Gray,
    }
}
