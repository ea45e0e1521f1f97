//! List operations
//!
//! The free functions in this module are the pure list rules: they mutate a
//! list in place and report what happened as an [`Outcome`]. They never touch
//! storage.
//!
//! [`ListController`] is what a view layer calls. It runs the same rules
//! against the list owned by a [`ListStore`] and persists once after any
//! operation that changed something.
//!
//! # Invariants
//!
//! - No two items share a case-insensitive name
//! - Every item has `amount >= 1`; decrementing the last unit removes it
//! - Items keep insertion order; new names are appended

use crate::item::{Item, ItemId};
use crate::store::ListStore;
use tracing::debug;

/// What an operation did to the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing matched or the input was blank
    Unchanged,
    /// A new item was appended
    Added(ItemId),
    /// An existing item's amount changed
    Updated { id: ItemId, amount: u32 },
    /// An item was removed
    Removed(Item),
    /// The list was emptied; carries how many items were dropped
    Cleared(usize),
}

impl Outcome {
    /// Whether the list must be written back.
    pub fn is_change(&self) -> bool {
        !matches!(self, Outcome::Unchanged)
    }
}

/// Add one unit of `raw_name`, merging with an existing item of the same
/// case-insensitive name. Blank names are ignored.
pub fn add_item(items: &mut Vec<Item>, raw_name: &str) -> Outcome {
    let name = raw_name.trim();
    if name.is_empty() {
        return Outcome::Unchanged;
    }

    if let Some(item) = items.iter_mut().find(|item| item.matches_name(name)) {
        item.amount = item.amount.saturating_add(1);
        return Outcome::Updated {
            id: item.id,
            amount: item.amount,
        };
    }

    let item = Item::new(name);
    let id = item.id;
    items.push(item);
    Outcome::Added(id)
}

/// Add one unit to the item with `id`.
pub fn increment_amount(items: &mut [Item], id: ItemId) -> Outcome {
    match items.iter_mut().find(|item| item.id == id) {
        Some(item) => {
            item.amount = item.amount.saturating_add(1);
            Outcome::Updated {
                id,
                amount: item.amount,
            }
        }
        None => Outcome::Unchanged,
    }
}

/// Take one unit from the item with `id`, removing it at zero.
pub fn decrement_amount(items: &mut Vec<Item>, id: ItemId) -> Outcome {
    let Some(index) = position_of(items, id) else {
        return Outcome::Unchanged;
    };

    let item = &mut items[index];
    item.amount = item.amount.saturating_sub(1);
    if item.amount == 0 {
        Outcome::Removed(items.remove(index))
    } else {
        Outcome::Updated {
            id,
            amount: item.amount,
        }
    }
}

/// Remove the item with `id`, keeping the order of the rest.
pub fn delete_item(items: &mut Vec<Item>, id: ItemId) -> Outcome {
    match position_of(items, id) {
        Some(index) => Outcome::Removed(items.remove(index)),
        None => Outcome::Unchanged,
    }
}

/// Remove every item. Always counts as a change.
pub fn clear_all(items: &mut Vec<Item>) -> Outcome {
    let count = items.len();
    items.clear();
    Outcome::Cleared(count)
}

fn position_of(items: &[Item], id: ItemId) -> Option<usize> {
    items.iter().position(|item| item.id == id)
}

// ============================================================================
// Controller
// ============================================================================

/// View-facing entry point: list rules plus persistence.
#[derive(Debug)]
pub struct ListController {
    store: ListStore,
}

impl ListController {
    pub fn new(store: ListStore) -> Self {
        Self { store }
    }

    /// Items to render, in insertion order
    pub fn items(&self) -> &[Item] {
        self.store.items()
    }

    pub fn store(&self) -> &ListStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ListStore {
        &mut self.store
    }

    pub fn into_store(self) -> ListStore {
        self.store
    }

    pub fn add_item(&mut self, raw_name: &str) -> Outcome {
        let outcome = add_item(self.store.items_mut(), raw_name);
        self.finish("add_item", outcome)
    }

    pub fn increment_amount(&mut self, id: ItemId) -> Outcome {
        let outcome = increment_amount(self.store.items_mut(), id);
        self.finish("increment_amount", outcome)
    }

    pub fn decrement_amount(&mut self, id: ItemId) -> Outcome {
        let outcome = decrement_amount(self.store.items_mut(), id);
        self.finish("decrement_amount", outcome)
    }

    pub fn delete_item(&mut self, id: ItemId) -> Outcome {
        let outcome = delete_item(self.store.items_mut(), id);
        self.finish("delete_item", outcome)
    }

    pub fn clear_all(&mut self) -> Outcome {
        let outcome = clear_all(self.store.items_mut());
        self.finish("clear_all", outcome)
    }

    /// Persist exactly once if the operation changed the list.
    fn finish(&mut self, op: &str, outcome: Outcome) -> Outcome {
        debug!("{} -> {:?}", op, outcome);
        if outcome.is_change() {
            self.store.commit();
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::{KeyValueStore, MemoryStore};
    use crate::store::DEFAULT_STORAGE_KEY;
    use std::cell::Cell;
    use std::rc::Rc;

    fn names(items: &[Item]) -> Vec<(&str, u32)> {
        items.iter().map(|i| (i.name.as_str(), i.amount)).collect()
    }

    fn controller() -> ListController {
        ListController::new(ListStore::new(
            Box::new(MemoryStore::new()),
            DEFAULT_STORAGE_KEY,
        ))
    }

    #[test]
    fn test_add_merges_case_insensitively() {
        let mut items = Vec::new();
        add_item(&mut items, "milk");
        let outcome = add_item(&mut items, "Milk");

        assert_eq!(names(&items), vec![("Milk", 2)]);
        assert_eq!(
            outcome,
            Outcome::Updated {
                id: items[0].id,
                amount: 2
            }
        );
    }

    #[test]
    fn test_add_shouting_merges_into_capitalized() {
        let mut items = Vec::new();
        add_item(&mut items, "MILK");
        add_item(&mut items, "milk");
        assert_eq!(names(&items), vec![("Milk", 2)]);
    }

    #[test]
    fn test_add_non_ascii_twice_merges() {
        let mut items = Vec::new();
        for raw in ["ΣΑΣ", "ßo", "ærter"] {
            add_item(&mut items, raw);
            add_item(&mut items, raw);
        }
        assert_eq!(names(&items), vec![("Σασ", 2), ("SSo", 2), ("Ærter", 2)]);
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut items = Vec::new();
        assert_eq!(add_item(&mut items, ""), Outcome::Unchanged);
        assert_eq!(add_item(&mut items, "   \t"), Outcome::Unchanged);
        assert!(items.is_empty());
    }

    #[test]
    fn test_eggs_bread_scenario() {
        let mut items = Vec::new();
        add_item(&mut items, "eggs");
        add_item(&mut items, "Eggs");
        add_item(&mut items, "bread");
        assert_eq!(names(&items), vec![("Eggs", 2), ("Bread", 1)]);
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut items = Vec::new();
        add_item(&mut items, "tea");
        let id = items[0].id;

        assert_eq!(
            increment_amount(&mut items, id),
            Outcome::Updated { id, amount: 2 }
        );
        assert_eq!(
            decrement_amount(&mut items, id),
            Outcome::Updated { id, amount: 1 }
        );
    }

    #[test]
    fn test_decrement_at_one_removes() {
        let mut items = Vec::new();
        add_item(&mut items, "tea");
        add_item(&mut items, "jam");
        let id = items[0].id;

        let outcome = decrement_amount(&mut items, id);
        assert!(matches!(outcome, Outcome::Removed(ref item) if item.name == "Tea"));
        assert_eq!(names(&items), vec![("Jam", 1)]);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut items = Vec::new();
        add_item(&mut items, "tea");
        let before = items.clone();
        let stranger = uuid::Uuid::new_v4();

        assert_eq!(increment_amount(&mut items, stranger), Outcome::Unchanged);
        assert_eq!(decrement_amount(&mut items, stranger), Outcome::Unchanged);
        assert_eq!(delete_item(&mut items, stranger), Outcome::Unchanged);
        assert_eq!(items, before);
    }

    #[test]
    fn test_delete_keeps_order() {
        let mut items = Vec::new();
        for name in ["a", "b", "c"] {
            add_item(&mut items, name);
        }
        let middle = items[1].id;
        delete_item(&mut items, middle);
        assert_eq!(names(&items), vec![("A", 1), ("C", 1)]);
    }

    #[test]
    fn test_increment_saturates() {
        let mut items = vec![Item::with_id(uuid::Uuid::new_v4(), "rice", u32::MAX)];
        let id = items[0].id;
        increment_amount(&mut items, id);
        assert_eq!(items[0].amount, u32::MAX);
    }

    #[test]
    fn test_clear_all_is_always_a_change() {
        let mut items = Vec::new();
        assert_eq!(clear_all(&mut items), Outcome::Cleared(0));
        assert!(Outcome::Cleared(0).is_change());
    }

    #[test]
    fn test_controller_persists_after_change() {
        let mut ctl = controller();
        ctl.add_item("eggs");

        let stored = ctl
            .store()
            .backend()
            .get(DEFAULT_STORAGE_KEY)
            .unwrap()
            .unwrap();
        let stored: Vec<Item> = serde_json::from_slice(&stored).unwrap();
        assert_eq!(stored, ctl.items());
    }

    #[test]
    fn test_controller_saves_once_per_change() {
        let saves = Rc::new(Cell::new(0));
        let counter = Rc::clone(&saves);

        let mut ctl = controller();
        ctl.store_mut().subscribe(move |_| counter.set(counter.get() + 1));

        ctl.add_item("tea");
        let id = ctl.items()[0].id;
        ctl.add_item("  ");
        ctl.increment_amount(uuid::Uuid::new_v4());
        ctl.decrement_amount(id);
        ctl.clear_all();

        // add, decrement-to-zero, clear
        assert_eq!(saves.get(), 3);
        assert!(ctl.items().is_empty());
    }

    #[test]
    fn test_controller_clear_then_load_is_empty() {
        let mut ctl = controller();
        ctl.add_item("eggs");
        ctl.add_item("bread");
        ctl.clear_all();
        assert!(ctl.store().load().unwrap().is_empty());
    }
}
