//! Board Context
//!
//! Shared drag state provided via Leptos Context API.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

/// Drag signals plus the board element used as the drag boundary
#[derive(Clone, Copy)]
pub struct BoardDndContext {
    pub dnd: DndSignals,
    pub board_ref: NodeRef<Div>,
}
