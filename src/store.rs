//! List store
//!
//! [`ListStore`] owns the authoritative in-memory list and keeps one slot of
//! a [`KeyValueStore`] in step with it. Every save rewrites the whole list.
//!
//! Storage failures never escape as fatal errors: a slot that cannot be
//! decoded is treated as an empty list, and a failed write leaves the
//! in-memory list as the source of truth for the rest of the session. Both
//! cases are logged.

use crate::error::{Result, ShopListError};
use crate::item::{Item, fold_name};
use crate::kv::KeyValueStore;
use tracing::{debug, error, info, warn};

/// Slot name used when no other key is configured.
pub const DEFAULT_STORAGE_KEY: &str = "shoppingItems";

/// Callback invoked with the new list after every committed mutation.
pub type Listener = Box<dyn FnMut(&[Item])>;

/// Owner of the in-memory list and its persistence round-trip.
pub struct ListStore {
    items: Vec<Item>,
    backend: Box<dyn KeyValueStore>,
    key: String,
    listeners: Vec<Listener>,
    /// Set when the most recent write failed
    dirty: bool,
}

impl ListStore {
    /// Create a store with an empty list. Nothing is read from `backend`.
    pub fn new(backend: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            backend,
            key: key.into(),
            listeners: Vec::new(),
            dirty: false,
        }
    }

    /// Create a store and load the list from its slot.
    ///
    /// An unreadable or undecodable slot yields an empty list.
    pub fn open(backend: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let mut store = Self::new(backend, key);
        store.items = match store.load() {
            Ok(items) => {
                info!("Loaded {} item(s) from '{}'", items.len(), store.key);
                items
            }
            Err(e) => {
                warn!("Could not load list from '{}', starting empty: {}", store.key, e);
                Vec::new()
            }
        };
        store
    }

    /// Read the list stored in the slot.
    ///
    /// Returns an empty list when the slot is absent, and
    /// [`ShopListError::Decode`] when its contents are not a list of items.
    pub fn load(&self) -> Result<Vec<Item>> {
        let Some(bytes) = self.backend.get(&self.key)? else {
            debug!("Slot '{}' is empty", self.key);
            return Ok(Vec::new());
        };
        decode_items(&bytes)
    }

    /// Serialize `items` and overwrite the slot.
    pub fn save(&mut self, items: &[Item]) -> Result<()> {
        let bytes = encode_items(items)?;
        self.backend.set(&self.key, &bytes)
    }

    /// Write the current list to the slot.
    ///
    /// Failures are logged, not returned; the return value tells whether the
    /// write went through.
    pub fn persist(&mut self) -> bool {
        let result =
            encode_items(&self.items).and_then(|bytes| self.backend.set(&self.key, &bytes));
        match result {
            Ok(()) => {
                debug!("Persisted {} item(s) to '{}'", self.items.len(), self.key);
                self.dirty = false;
                true
            }
            Err(e) => {
                error!("Could not save list to '{}': {}", self.key, e);
                self.dirty = true;
                false
            }
        }
    }

    /// Persist the list and notify subscribers.
    pub(crate) fn commit(&mut self) -> bool {
        let saved = self.persist();
        for listener in &mut self.listeners {
            listener(&self.items);
        }
        saved
    }

    /// Register a listener called with the list after every mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&[Item]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Current list, in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<Item> {
        &mut self.items
    }

    /// True when the last write failed and the slot may be stale.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Name of the slot this store writes to
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &dyn KeyValueStore {
        self.backend.as_ref()
    }

    /// Give back the backend, e.g. to reopen it with a fresh store.
    pub fn into_backend(self) -> Box<dyn KeyValueStore> {
        self.backend
    }
}

impl std::fmt::Debug for ListStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListStore")
            .field("key", &self.key)
            .field("items", &self.items)
            .field("listeners", &self.listeners.len())
            .field("dirty", &self.dirty)
            .finish()
    }
}

/// Encode a list into the slot format (a JSON array of items).
pub fn encode_items(items: &[Item]) -> Result<Vec<u8>> {
    serde_json::to_vec(items).map_err(ShopListError::Encode)
}

/// Decode the slot format.
///
/// Records with a zero amount are dropped. Records whose names match ignoring
/// case are merged into the first one, summing their amounts.
pub fn decode_items(bytes: &[u8]) -> Result<Vec<Item>> {
    let mut items: Vec<Item> = serde_json::from_slice(bytes).map_err(ShopListError::Decode)?;
    let before = items.len();
    items.retain(|item| item.amount > 0);
    if items.len() != before {
        warn!("Dropped {} stored item(s) with zero amount", before - items.len());
    }

    let before = items.len();
    let mut merged: Vec<Item> = Vec::with_capacity(items.len());
    for item in items {
        let folded = fold_name(&item.name);
        match merged.iter_mut().find(|kept| fold_name(&kept.name) == folded) {
            Some(kept) => kept.amount = kept.amount.saturating_add(item.amount),
            None => merged.push(item),
        }
    }
    if merged.len() != before {
        warn!("Merged {} stored item(s) with duplicate names", before - merged.len());
    }
    Ok(merged)
}
