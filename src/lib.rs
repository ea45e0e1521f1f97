//! shoplist library
//!
//! Core list logic and persistence for a single-screen shopping list, plus
//! the terminal presentation layer that drives it.
//!
//! The core is UI-agnostic: [`ListController`] exposes the operations a view
//! calls and [`ListStore`] keeps the list in one key-value slot.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod item;
pub mod kv;
pub mod store;
pub mod terminal;
pub mod theme;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppState, InputMode};
pub use config::Settings;
pub use controller::{ListController, Outcome};
pub use error::{Result, ShopListError};
pub use item::{Item, ItemId};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use store::{DEFAULT_STORAGE_KEY, ListStore};
pub use terminal::TerminalSession;
