//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The mutation
//! logic lives in plain functions over `Vec<Card>` so it can be tested
//! without a reactive runtime.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{format_filesize, Card, CardPatch, FileMeta, NewCard};

/// Board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// All cards on the board
    pub cards: Vec<Card>,
    /// Next id handed to a created card
    pub next_card_id: u32,
    /// Whether the creation form overlay is shown
    pub show_add_form: bool,
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            next_card_id: 1,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Plain Mutation Helpers
// ========================

/// Merge an edit payload into the card with the given id
pub fn apply_edit(cards: &mut Vec<Card>, id: u32, patch: &CardPatch) -> bool {
    match cards.iter_mut().find(|card| card.id == id) {
        Some(card) => {
            card.apply_edit(patch);
            true
        }
        None => false,
    }
}

/// Remove the card with the given id
pub fn remove_card(cards: &mut Vec<Card>, id: u32) -> bool {
    let before = cards.len();
    cards.retain(|card| card.id != id);
    cards.len() != before
}

/// Attach a file to the card with the given id and refresh its size string
pub fn attach_file(cards: &mut Vec<Card>, id: u32, file: FileMeta) -> bool {
    match cards.iter_mut().find(|card| card.id == id) {
        Some(card) => {
            card.filesize = format_filesize(Some(&file));
            card.file = Some(file);
            true
        }
        None => false,
    }
}

// ========================
// Store Helper Functions
// ========================

/// Append a new card, assigning the next id; returns the id
pub fn store_add_card(store: &BoardStore, new: NewCard) -> u32 {
    let id = store.next_card_id().get();
    store.next_card_id().set(id + 1);
    store.cards().write().push(Card::from_new(id, new));
    id
}

/// Merge an edit payload into a stored card
pub fn store_apply_edit(store: &BoardStore, id: u32, patch: &CardPatch) {
    apply_edit(&mut store.cards().write(), id, patch);
}

/// Remove a card from the store by id
pub fn store_remove_card(store: &BoardStore, id: u32) {
    remove_card(&mut store.cards().write(), id);
}

/// Attach a file to a stored card
pub fn store_attach_file(store: &BoardStore, id: u32, file: FileMeta) {
    attach_file(&mut store.cards().write(), id, file);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CardTag, Priority, TagColor, TaskType};

    fn make_card(id: u32) -> Card {
        Card {
            id,
            title: format!("Card {}", id),
            desc: "desc".to_string(),
            priority: Priority::None,
            task_type: TaskType::Reminder,
            tag: CardTag {
                is_open: true,
                tag_title: format!("Card {}", id),
                tag_color: TagColor::Green,
            },
            file: None,
            filesize: "0mb".to_string(),
            due_date: None,
        }
    }

    #[test]
    fn test_apply_edit_targets_matching_card() {
        let mut cards = vec![make_card(1), make_card(2)];
        let patch = CardPatch {
            desc: "changed".to_string(),
            task_type: TaskType::Checklist,
            priority: Priority::High,
            tag_color: TagColor::Yellow,
        };

        assert!(apply_edit(&mut cards, 2, &patch));
        assert_eq!(cards[1].desc, "changed");
        // The other card is untouched
        assert_eq!(cards[0].desc, "desc");

        assert!(!apply_edit(&mut cards, 99, &patch));
    }

    #[test]
    fn test_remove_card_deletes_exactly_one() {
        let mut cards = vec![make_card(1), make_card(2), make_card(3)];
        assert!(remove_card(&mut cards, 2));
        assert_eq!(cards.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 3]);

        assert!(!remove_card(&mut cards, 2));
        assert_eq!(cards.len(), 2);
    }

    #[test]
    fn test_attach_file_refreshes_filesize() {
        let mut cards = vec![make_card(1)];
        let file = FileMeta { name: "scan.png".to_string(), size: 2_097_152 };

        assert!(attach_file(&mut cards, 1, file.clone()));
        assert_eq!(cards[0].file, Some(file));
        assert_eq!(cards[0].filesize, "2.00MB");

        let other = FileMeta { name: "x".to_string(), size: 1 };
        assert!(!attach_file(&mut cards, 42, other));
    }
}
