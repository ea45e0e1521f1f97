//! Help overlay component
//!
//! Displays the list-screen keybindings in a centered floating window.

use super::keybindings::KeybindingContext;
use super::popup_area;
use crate::app::InputMode;
use crate::theme::{Colors, Styles};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Build the overlay; help is only reachable from the list, so it
    /// describes the list bindings
    pub fn new(keybinding_ctx: &KeybindingContext) -> Self {
        Self {
            content: Self::build_content(&keybinding_ctx.get_help_rows(InputMode::Browse)),
        }
    }

    fn build_content(rows: &[(String, String)]) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = vec![
            Line::from(Span::styled("  Shopping List Help  ", Styles::title())),
            Line::from(""),
        ];

        let key_width = rows.iter().map(|(keys, _)| keys.len()).max().unwrap_or(0);
        for (keys, description) in rows {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {keys:>key_width$}  "),
                    Style::default()
                        .fg(Colors::WARNING)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(description.clone(), Styles::text()),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Names are matched ignoring case: adding \"MILK\" twice gives Milk x2.",
            Styles::text_muted(),
        )));
        lines
    }

    /// Number of content lines, used to size the window
    pub fn height(&self) -> u16 {
        u16::try_from(self.content.len()).unwrap_or(u16::MAX)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup = popup_area(area, 72, self.height().saturating_add(2));
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(self.content.clone()).block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Styles::border_active()),
            ),
            popup,
        );
    }
}
