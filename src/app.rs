//! Card Board App
//!
//! Board container: owns the card list, assigns ids, and wires the creation
//! form and every card callback.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_mouseup, clamp_within, create_dnd_signals, Rect};
use reactive_stores::Store;

use crate::components::{AddCardForm, TaskCard};
use crate::context::BoardDndContext;
use crate::models::{CardPatch, FileMeta, NewCard};
use crate::store::{
    store_add_card, store_apply_edit, store_attach_file, store_remove_card, BoardState,
    BoardStateStoreFields,
};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(BoardState::new());
    provide_context(store);

    let dnd = create_dnd_signals();
    let board_ref = NodeRef::<leptos::html::Div>::new();
    provide_context(BoardDndContext { dnd, board_ref });

    // Committed drag offsets per card id, presentation state only
    let (offsets, set_offsets) = signal(HashMap::<u32, (i32, i32)>::new());

    // Commit drags, keeping each card inside the board. The release fires
    // while the drag transform is still applied, so the DOM rects are the
    // dropped position.
    bind_global_mouseup(dnd, move |id, dx, dy| {
        let (ox, oy) = offsets.get_untracked().get(&id).copied().unwrap_or((0, 0));
        let mut next = (ox + dx, oy + dy);

        let card_rect = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(&format!("card-{}", id)))
            .map(|el| Rect::from_dom(&el.get_bounding_client_rect()));
        let board_rect = board_ref
            .get_untracked()
            .map(|el| Rect::from_dom(&el.get_bounding_client_rect()));
        if let (Some(card), Some(board)) = (card_rect, board_rect) {
            next = clamp_within(next, card, board);
        }

        set_offsets.update(|map| {
            map.insert(id, next);
        });
    });

    let on_add = Callback::new(move |new_card: NewCard| {
        let id = store_add_card(&store, new_card);
        web_sys::console::log_1(&format!("[BOARD] Created card {}", id).into());
    });

    let on_close = Callback::new(move |_: ()| store.show_add_form().set(false));

    let on_edit = Callback::new(move |(id, patch): (u32, CardPatch)| {
        store_apply_edit(&store, id, &patch);
        web_sys::console::log_1(&format!("[BOARD] Saved edits to card {}", id).into());
    });

    let on_delete = Callback::new(move |id: u32| {
        store_remove_card(&store, id);
        set_offsets.update(|map| {
            map.remove(&id);
        });
        web_sys::console::log_1(&format!("[BOARD] Deleted card {}", id).into());
    });

    let on_file_upload = Callback::new(move |(id, file): (u32, web_sys::File)| {
        let meta = FileMeta {
            name: file.name(),
            size: file.size() as u64,
        };
        web_sys::console::log_1(&format!("[BOARD] Attached {} to card {}", meta.name, id).into());
        store_attach_file(&store, id, meta);
    });

    view! {
        <div class="board-page">
            <header class="board-header">
                <h1>"Card Board"</h1>
                <button class="add-card-btn" on:click=move |_| store.show_add_form().set(true)>
                    "+ Add Card"
                </button>
            </header>

            <div class="board" node_ref=board_ref>
                <For
                    each=move || store.cards().get()
                    key=|card| card.clone()
                    children=move |card| {
                        let id = card.id;
                        let offset = Signal::derive(move || {
                            offsets.get().get(&id).copied().unwrap_or((0, 0))
                        });
                        view! {
                            <TaskCard
                                card=card
                                offset=offset
                                on_edit=on_edit
                                on_delete=on_delete
                                on_file_upload=on_file_upload
                            />
                        }
                    }
                />
            </div>

            <Show when=move || store.show_add_form().get()>
                <div class="modal-overlay">
                    <AddCardForm on_add=on_add on_close=on_close />
                </div>
            </Show>

            <p class="card-count">{move || format!("{} cards", store.cards().read().len())}</p>
        </div>
    }
}
