//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change with the current input mode.
//! The same registry drives key dispatch, the navigation bar and the help
//! overlay, so the three never disagree.

use crate::app::InputMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    First,
    Last,
    Increment,
    Decrement,
    Delete,
    FocusInput,
    Submit,
    LeaveInput,
    ClearAll,
    Confirm,
    Cancel,
    Help,
    Dismiss,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether `event` triggers this binding.
    ///
    /// Shift is ignored for character keys since it is already reflected in
    /// the character itself (`C` arrives as `Char('C')` + SHIFT).
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if self.key != event.code {
            return false;
        }
        let mut modifiers = event.modifiers;
        if matches!(event.code, KeyCode::Char(_)) {
            modifiers.remove(KeyModifiers::SHIFT);
        }
        modifiers == self.modifiers
    }
}

/// Navigation bar entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<InputMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    fn register_defaults(&mut self) {
        self.global_bindings = vec![Keybinding::with_modifiers(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyAction::Quit,
            "Ctrl+C",
            "Quit",
        )];

        // List browsing
        self.mode_bindings.insert(
            InputMode::Browse,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous item"),
                Keybinding::new(KeyCode::Char('k'), KeyAction::NavigateUp, "K", "Previous item"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next item"),
                Keybinding::new(KeyCode::Char('j'), KeyAction::NavigateDown, "J", "Next item"),
                Keybinding::new(KeyCode::Home, KeyAction::First, "Home", "First item"),
                Keybinding::new(KeyCode::End, KeyAction::Last, "End", "Last item"),
                Keybinding::new(KeyCode::Char('+'), KeyAction::Increment, "+", "One more"),
                Keybinding::new(KeyCode::Right, KeyAction::Increment, "Right", "One more"),
                Keybinding::new(KeyCode::Char('-'), KeyAction::Decrement, "-", "One less"),
                Keybinding::new(KeyCode::Left, KeyAction::Decrement, "Left", "One less"),
                Keybinding::new(KeyCode::Char('d'), KeyAction::Delete, "D", "Delete item"),
                Keybinding::new(KeyCode::Delete, KeyAction::Delete, "Del", "Delete item"),
                Keybinding::new(KeyCode::Char('a'), KeyAction::FocusInput, "A", "Add item"),
                Keybinding::new(KeyCode::Char('i'), KeyAction::FocusInput, "I", "Add item"),
                Keybinding::new(KeyCode::Tab, KeyAction::FocusInput, "Tab", "Add item"),
                Keybinding::new(KeyCode::Char('C'), KeyAction::ClearAll, "Shift+C", "Clear list"),
                Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
                Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            ],
        );

        // Text entry
        self.mode_bindings.insert(
            InputMode::Editing,
            vec![
                Keybinding::new(KeyCode::Enter, KeyAction::Submit, "Enter", "Add"),
                Keybinding::new(KeyCode::Esc, KeyAction::LeaveInput, "Esc", "Back to list"),
                Keybinding::new(KeyCode::Tab, KeyAction::LeaveInput, "Tab", "Back to list"),
            ],
        );

        // Clear confirmation
        self.mode_bindings.insert(
            InputMode::ConfirmClear,
            vec![
                Keybinding::new(KeyCode::Char('y'), KeyAction::Confirm, "Y", "Clear everything"),
                Keybinding::new(KeyCode::Enter, KeyAction::Confirm, "Enter", "Clear everything"),
                Keybinding::new(KeyCode::Char('n'), KeyAction::Cancel, "N", "Keep list"),
                Keybinding::new(KeyCode::Esc, KeyAction::Cancel, "Esc", "Keep list"),
            ],
        );

        // Help overlay
        self.mode_bindings.insert(
            InputMode::Help,
            vec![
                Keybinding::new(KeyCode::Esc, KeyAction::Dismiss, "Esc", "Close"),
                Keybinding::new(KeyCode::Enter, KeyAction::Dismiss, "Enter", "Close"),
                Keybinding::new(KeyCode::Char('?'), KeyAction::Dismiss, "?", "Close"),
                Keybinding::new(KeyCode::Char('q'), KeyAction::Dismiss, "Q", "Close"),
            ],
        );
    }

    /// Get keybindings for a specific mode (includes global bindings)
    pub fn get_bindings(&self, mode: InputMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();
        if let Some(mode_bindings) = self.mode_bindings.get(&mode) {
            bindings.extend(mode_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());
        bindings
    }

    /// Resolve a key event to an action in `mode`
    pub fn resolve(&self, mode: InputMode, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(mode)
            .into_iter()
            .find(|binding| binding.matches(event))
            .map(|binding| binding.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: InputMode) -> Vec<NavBarItem> {
        let priority_actions: &[KeyAction] = match mode {
            InputMode::Browse => &[
                KeyAction::NavigateUp,
                KeyAction::Increment,
                KeyAction::Decrement,
                KeyAction::FocusInput,
                KeyAction::Delete,
                KeyAction::ClearAll,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            InputMode::Editing => &[KeyAction::Submit, KeyAction::LeaveInput],
            InputMode::ConfirmClear => &[KeyAction::Confirm, KeyAction::Cancel],
            InputMode::Help => &[KeyAction::Dismiss],
        };

        let bindings = self.get_bindings(mode);
        let mut items = Vec::new();
        for action in priority_actions {
            if *action == KeyAction::NavigateUp {
                items.push(NavBarItem {
                    key_display: "Up/Dn".to_string(),
                    action_label: "Navigate".to_string(),
                });
                continue;
            }
            if let Some(binding) = bindings.iter().find(|b| b.action == *action) {
                items.push(NavBarItem {
                    key_display: binding.display.clone(),
                    action_label: binding.description.clone(),
                });
            }
        }
        items
    }

    /// Help overlay rows as (keys, description), one row per action
    pub fn get_help_rows(&self, mode: InputMode) -> Vec<(String, String)> {
        let mut rows: Vec<(KeyAction, Vec<String>, String)> = Vec::new();
        for binding in self.get_bindings(mode) {
            match rows.iter_mut().find(|(action, _, _)| *action == binding.action) {
                Some((_, keys, _)) => keys.push(binding.display.clone()),
                None => rows.push((
                    binding.action,
                    vec![binding.display.clone()],
                    binding.description.clone(),
                )),
            }
        }
        rows.into_iter()
            .map(|(_, keys, description)| (keys.join("/"), description))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_browse_bindings_resolve() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.resolve(InputMode::Browse, &key(KeyCode::Char('+'))),
            Some(KeyAction::Increment)
        );
        assert_eq!(
            ctx.resolve(InputMode::Browse, &key(KeyCode::Left)),
            Some(KeyAction::Decrement)
        );
        assert_eq!(ctx.resolve(InputMode::Browse, &key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_shifted_character_matches() {
        let ctx = KeybindingContext::new();
        let event = KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT);
        assert_eq!(
            ctx.resolve(InputMode::Browse, &event),
            Some(KeyAction::ClearAll)
        );
    }

    #[test]
    fn test_editing_mode_leaves_letters_unbound() {
        let ctx = KeybindingContext::new();
        assert_eq!(ctx.resolve(InputMode::Editing, &key(KeyCode::Char('q'))), None);
        assert_eq!(ctx.resolve(InputMode::Editing, &key(KeyCode::Char('a'))), None);
        assert_eq!(
            ctx.resolve(InputMode::Editing, &key(KeyCode::Enter)),
            Some(KeyAction::Submit)
        );
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctx = KeybindingContext::new();
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for mode in [
            InputMode::Browse,
            InputMode::Editing,
            InputMode::ConfirmClear,
            InputMode::Help,
        ] {
            assert_eq!(ctx.resolve(mode, &event), Some(KeyAction::Quit));
        }
    }

    #[test]
    fn test_nav_items_non_empty() {
        let ctx = KeybindingContext::new();
        let items = ctx.get_nav_items(InputMode::Browse);
        assert_eq!(items[0].action_label, "Navigate");
        assert!(items.iter().any(|i| i.action_label == "Clear list"));
    }

    #[test]
    fn test_help_rows_merge_keys_per_action() {
        let ctx = KeybindingContext::new();
        let rows = ctx.get_help_rows(InputMode::Browse);
        assert!(rows.contains(&("+/Right".to_string(), "One more".to_string())));
        assert!(rows.contains(&("A/I/Tab".to_string(), "Add item".to_string())));
    }
}
