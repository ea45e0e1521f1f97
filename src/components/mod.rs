//! Reusable TUI components
//!
//! - `keybindings` - mode-aware key registry, nav bar and help content
//! - `help_overlay` - floating help window

pub mod help_overlay;
pub mod keybindings;

use ratatui::layout::Rect;

/// A rectangle of at most `width` x `height` centered inside `area`.
pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
