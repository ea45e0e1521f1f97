//! Application module
//!
//! The terminal presentation layer: it turns key presses into list
//! operations and redraws the screen from the controller's items after each
//! event.
//!
//! # Module Structure
//! - `state` - screen state types (AppState, InputMode, StatusKind)
//! - Main module - App struct and event loop

mod state;

pub use state::{AppState, InputMode, StatusKind};

use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::controller::{ListController, Outcome};
use crate::error::Result;
use crate::item::{Item, ItemId};
use crate::ui;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;
use tracing::{debug, info};

/// How long the event loop waits for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Main application struct
pub struct App {
    controller: ListController,
    state: AppState,
    keybindings: KeybindingContext,
}

impl App {
    /// Create a new application instance around a loaded list
    pub fn new(controller: ListController) -> Self {
        info!(
            "Creating App with {} item(s) on the list",
            controller.items().len()
        );
        Self {
            controller,
            state: AppState::default(),
            keybindings: KeybindingContext::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn controller(&self) -> &ListController {
        &self.controller
    }

    pub fn items(&self) -> &[Item] {
        self.controller.items()
    }

    pub fn keybindings(&self) -> &KeybindingContext {
        &self.keybindings
    }

    /// Run the main application loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        while !self.state.should_quit {
            terminal.draw(|frame| ui::render(frame, self))?;

            if crossterm::event::poll(POLL_INTERVAL)? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    self.handle_key_event(key_event);
                }
            }
        }

        info!("Main loop finished");
        Ok(())
    }

    /// Handle one key press. Returns true when the app should exit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        if key_event.kind == KeyEventKind::Release {
            return self.state.should_quit;
        }

        match self.keybindings.resolve(self.state.mode, &key_event) {
            Some(action) => self.apply(action),
            None if self.state.mode == InputMode::Editing => self.edit_input(key_event),
            None => {}
        }

        self.state.should_quit
    }

    fn edit_input(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char(c)
                if !key_event
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.state.input.push(c);
            }
            KeyCode::Backspace => {
                self.state.input.pop();
            }
            _ => {}
        }
    }

    fn apply(&mut self, action: KeyAction) {
        debug!("Key action {:?} in mode {}", action, self.state.mode);
        let len = self.items().len();

        match action {
            KeyAction::NavigateUp => self.state.select_previous(),
            KeyAction::NavigateDown => self.state.select_next(len),
            KeyAction::First => self.state.selected = 0,
            KeyAction::Last => self.state.select_last(len),
            KeyAction::Increment => {
                if let Some(id) = self.selected_id() {
                    let outcome = self.controller.increment_amount(id);
                    self.report(outcome);
                }
            }
            KeyAction::Decrement => {
                if let Some(id) = self.selected_id() {
                    let outcome = self.controller.decrement_amount(id);
                    self.report(outcome);
                }
            }
            KeyAction::Delete => {
                if let Some(id) = self.selected_id() {
                    let outcome = self.controller.delete_item(id);
                    self.report(outcome);
                }
            }
            KeyAction::FocusInput => self.state.mode = InputMode::Editing,
            KeyAction::LeaveInput => self.state.mode = InputMode::Browse,
            KeyAction::Submit => self.submit_input(),
            KeyAction::ClearAll => {
                self.state.mode = InputMode::ConfirmClear;
                self.state
                    .set_status(StatusKind::Warning, "Clear the whole list? (y/n)");
            }
            KeyAction::Confirm => {
                self.state.mode = InputMode::Browse;
                let outcome = self.controller.clear_all();
                self.report(outcome);
            }
            KeyAction::Cancel => {
                self.state.mode = InputMode::Browse;
                self.state.set_status(StatusKind::Info, "List kept");
            }
            KeyAction::Help => self.state.mode = InputMode::Help,
            KeyAction::Dismiss => self.state.mode = InputMode::Browse,
            KeyAction::Quit => {
                info!("Quit requested");
                self.state.should_quit = true;
            }
        }
    }

    /// Add the typed name and clear the field; the field keeps focus.
    fn submit_input(&mut self) {
        let name = std::mem::take(&mut self.state.input);
        let outcome = self.controller.add_item(&name);
        match &outcome {
            Outcome::Added(id) | Outcome::Updated { id, .. } => {
                if let Some(index) = self.items().iter().position(|item| item.id == *id) {
                    self.state.selected = index;
                }
            }
            _ => {}
        }
        self.report(outcome);
    }

    fn selected_id(&self) -> Option<ItemId> {
        self.items().get(self.state.selected).map(|item| item.id)
    }

    /// Update the status line and selection after an operation.
    fn report(&mut self, outcome: Outcome) {
        self.state.clamp_selection(self.items().len());

        if self.controller.store().is_dirty() {
            self.state.set_status(
                StatusKind::Error,
                "Could not save list; changes are kept for this session",
            );
            return;
        }

        let name_of = |id: &ItemId| {
            self.items()
                .iter()
                .find(|item| item.id == *id)
                .map(|item| item.name.clone())
                .unwrap_or_default()
        };

        let (kind, message) = match &outcome {
            Outcome::Unchanged => return,
            Outcome::Added(id) => (StatusKind::Success, format!("Added {}", name_of(id))),
            Outcome::Updated { id, amount } => {
                (StatusKind::Info, format!("{}: {}", name_of(id), amount))
            }
            Outcome::Removed(item) => (StatusKind::Info, format!("Removed {}", item.name)),
            Outcome::Cleared(count) => (
                StatusKind::Success,
                format!("Cleared {} item(s)", count),
            ),
        };
        self.state.set_status(kind, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use crate::store::{DEFAULT_STORAGE_KEY, ListStore};

    fn app() -> App {
        let store = ListStore::new(Box::new(MemoryStore::new()), DEFAULT_STORAGE_KEY);
        App::new(ListController::new(store))
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_line(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_typing_adds_items_and_keeps_focus() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.state().mode, InputMode::Editing);

        type_line(&mut app, "eggs");
        type_line(&mut app, "Eggs");
        type_line(&mut app, "bread");

        let items: Vec<_> = app.items().iter().map(|i| (i.name.clone(), i.amount)).collect();
        assert_eq!(
            items,
            vec![("Eggs".to_string(), 2), ("Bread".to_string(), 1)]
        );
        assert_eq!(app.state().mode, InputMode::Editing);
        assert!(app.state().input.is_empty());
        assert_eq!(app.state().selected, 1);
    }

    #[test]
    fn test_letters_in_field_are_text_not_commands() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert!(!press(&mut app, KeyCode::Char('q')));
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.state().input, "d");
    }

    #[test]
    fn test_amount_keys_act_on_selection() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        type_line(&mut app, "tea");
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.items()[0].amount, 2);
        assert_eq!(app.state().status_message, "Tea: 2");

        press(&mut app, KeyCode::Char('-'));
        press(&mut app, KeyCode::Char('-'));
        assert!(app.items().is_empty());
        assert_eq!(app.state().status_message, "Removed Tea");

        // nothing selected: no-op
        press(&mut app, KeyCode::Char('d'));
        assert!(app.items().is_empty());
    }

    #[test]
    fn test_clear_requires_confirmation() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        type_line(&mut app, "tea");
        press(&mut app, KeyCode::Esc);

        app.handle_key_event(KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT));
        assert_eq!(app.state().mode, InputMode::ConfirmClear);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.items().len(), 1);

        app.handle_key_event(KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.items().is_empty());
        assert_eq!(app.state().status_message, "Cleared 1 item(s)");
    }

    #[test]
    fn test_help_and_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.state().mode, InputMode::Help);
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.state().mode, InputMode::Browse);
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = app();
        let mut event = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        app.handle_key_event(event);
        assert_eq!(app.state().mode, InputMode::Browse);
    }
}
