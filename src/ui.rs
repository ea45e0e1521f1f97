//! User interface rendering
//!
//! Draws the single shopping-list screen:
//!
//! ```text
//! [C] Clear
//!  Your Shopping List
//! ┌──────────────────────────────┐
//! │ Eggs                 (-) 2 (+)│
//! │ Bread                (-) 1 (+)│
//! └──────────────────────────────┘
//! ┌ Add Item ────────────────────┐
//! │ milk_                        │
//! └──────────────────────────────┘
//! status line
//! key hints
//! ```

use crate::app::{App, InputMode, StatusKind};
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::components::popup_area;
use crate::item::Item;
use crate::theme::Styles;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

const TITLE: &str = "Your Shopping List";

/// Render the whole screen for `app`
pub fn render(frame: &mut Frame, app: &App) {
    let state = app.state();
    let screen = frame.area();
    let [header, title, list, input, status, nav] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(screen);

    render_header(frame, header);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!(" {TITLE}"), Styles::title()))),
        title,
    );
    render_items(frame, list, app.items(), state.selected, state.mode);
    render_input(frame, input, &state.input, state.mode);
    render_status(frame, status, &state.status_message, state.status_kind);
    render_nav_bar(frame, nav, app.keybindings(), state.mode);

    match state.mode {
        InputMode::ConfirmClear => render_confirm_clear(frame, screen, app.items().len()),
        InputMode::Help => HelpOverlay::new(app.keybindings()).render(frame, screen),
        InputMode::Browse | InputMode::Editing => {}
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" [C] ", Styles::error()),
        Span::styled("Clear", Styles::text()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// One list row: name on the left, `(-) n (+)` flush right.
fn item_line(item: &Item, width: u16) -> Line<'static> {
    let name = Span::styled(item.name.clone(), Styles::text());
    let controls = vec![
        Span::styled("(-) ", Styles::minus()),
        Span::styled(item.amount.to_string(), Styles::amount()),
        Span::styled(" (+)", Styles::plus()),
    ];
    let controls_width: usize = controls.iter().map(Span::width).sum();
    let pad = (width as usize)
        .saturating_sub(name.width() + controls_width)
        .max(1);

    let mut spans = vec![name, Span::raw(" ".repeat(pad))];
    spans.extend(controls);
    Line::from(spans)
}

fn render_items(frame: &mut Frame, area: Rect, items: &[Item], selected: usize, mode: InputMode) {
    let border = if mode == InputMode::Browse {
        Styles::border_active()
    } else {
        Styles::border_inactive()
    };
    let block = Block::default().borders(Borders::ALL).border_style(border);

    if items.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Your list is empty. Press A to add an item.",
                Styles::text_muted(),
            ))
            .block(block),
            area,
        );
        return;
    }

    // borders plus the highlight symbol
    let row_width = area.width.saturating_sub(4);
    let rows: Vec<ListItem> = items
        .iter()
        .map(|item| ListItem::new(item_line(item, row_width)))
        .collect();

    let list = List::new(rows)
        .block(block)
        .highlight_style(Styles::selected())
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_input(frame: &mut Frame, area: Rect, input: &str, mode: InputMode) {
    let editing = mode == InputMode::Editing;
    let border = if editing {
        Styles::border_active()
    } else {
        Styles::border_inactive()
    };
    let block = Block::default()
        .title(" Add Item ")
        .borders(Borders::ALL)
        .border_style(border);

    let text = if input.is_empty() && !editing {
        Span::styled("Add Item", Styles::text_muted())
    } else {
        Span::styled(input.to_string(), Styles::input())
    };
    frame.render_widget(Paragraph::new(text).block(block), area);

    if editing {
        let typed = u16::try_from(Span::raw(input).width()).unwrap_or(u16::MAX);
        let max_x = area.x + area.width.saturating_sub(2);
        frame.set_cursor_position((
            (area.x + 1).saturating_add(typed).min(max_x),
            area.y + 1,
        ));
    }
}

fn render_status(frame: &mut Frame, area: Rect, message: &str, kind: StatusKind) {
    let style = match kind {
        StatusKind::Info => Styles::text(),
        StatusKind::Success => Styles::success(),
        StatusKind::Warning => Styles::warning(),
        StatusKind::Error => Styles::error(),
    };
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {message}"), style)),
        area,
    );
}

fn render_nav_bar(frame: &mut Frame, area: Rect, keybindings: &KeybindingContext, mode: InputMode) {
    let mut spans = vec![Span::styled(format!(" {mode} "), Styles::selected())];
    for item in keybindings.get_nav_items(mode) {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(item.key_display, Styles::warning()));
        spans.push(Span::styled(format!(" {}", item.action_label), Styles::nav_hint()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_confirm_clear(frame: &mut Frame, area: Rect, count: usize) {
    let popup = popup_area(area, 44, 5);
    frame.render_widget(Clear, popup);
    let lines = vec![
        Line::from(Span::styled(
            format!("Remove all {count} item(s)?"),
            Styles::text(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y] ", Styles::error()),
            Span::raw("Clear   "),
            Span::styled("[n] ", Style::default()),
            Span::raw("Keep"),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Clear list ")
                .borders(Borders::ALL)
                .border_style(Styles::error()),
        ),
        popup,
    );
}
