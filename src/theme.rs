//! Centralized theme and styling for the TUI
//!
//! Single source of truth for the colors and styles the shopping list screen
//! uses. Components take styles from here rather than building them inline.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette
pub struct Colors;

impl Colors {
    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    /// Title and plus affordances
    pub const PRIMARY: Color = Color::Blue;

    /// Minus affordance and destructive actions
    pub const DANGER: Color = Color::Red;

    /// Success/positive feedback
    pub const SUCCESS: Color = Color::Green;

    /// Warning/caution feedback
    pub const WARNING: Color = Color::Yellow;

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Inactive/unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Selected row highlight
    pub const SELECTED_BG: Color = Color::Rgb(30, 30, 60);

    /// Text entry background, a tinted link color like the original field
    pub const INPUT_BG: Color = Color::Rgb(20, 30, 55);
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted/secondary text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Screen title: large, bold, blue
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    /// Selected list row
    pub fn selected() -> Style {
        Style::default()
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// "-" button
    pub fn minus() -> Style {
        Style::default().fg(Colors::DANGER)
    }

    /// "+" button
    pub fn plus() -> Style {
        Style::default().fg(Colors::PRIMARY)
    }

    /// Amount next to an item
    pub fn amount() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input() -> Style {
        Style::default().fg(Colors::FG_PRIMARY).bg(Colors::INPUT_BG)
    }

    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Colors::WARNING)
    }

    pub fn error() -> Style {
        Style::default().fg(Colors::DANGER)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }
}
