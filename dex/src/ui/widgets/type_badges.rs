//! Category badges

use ratatui::text::{Line, Span};

use dex_core::Badge;

use crate::ui::theme::DexTheme;

/// One colored span per badge, in record order
pub fn badge_line(badges: &[Badge], theme: &DexTheme) -> Line<'static> {
    let mut spans = Vec::with_capacity(badges.len() * 2);
    for (i, badge) in badges.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" {} ", badge.label.to_uppercase()),
            theme.badge_style(&badge.style_key),
        ));
    }
    Line::from(spans)
}
