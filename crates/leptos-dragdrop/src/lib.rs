//! Leptos DragDrop Utilities
//!
//! Free-position dragging for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending card id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Live pointer position while dragging
    pub cur_x_read: ReadSignal<i32>,
    pub cur_x_write: WriteSignal<i32>,
    pub cur_y_read: ReadSignal<i32>,
    pub cur_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    let (cur_x_read, cur_x_write) = signal(0i32);
    let (cur_y_read, cur_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        cur_x_read,
        cur_x_write,
        cur_y_read,
        cur_y_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    let clear = dnd.drag_just_ended_write;
    gloo_timers::callback::Timeout::new(100, move || clear.set(false)).forget();
}

/// Live drag offset for a card: (cursor - start) while this card is dragged, zero otherwise
pub fn drag_delta(dnd: DndSignals, card_id: u32) -> (i32, i32) {
    if dnd.dragging_id_read.get() == Some(card_id) {
        (
            dnd.cur_x_read.get() - dnd.start_x_read.get(),
            dnd.cur_y_read.get() - dnd.start_y_read.get(),
        )
    } else {
        (0, 0)
    }
}

/// Create mousedown handler for draggable cards
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, card_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is a form control
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
            }
            // Record pending drag with position
            dnd.pending_id_write.set(Some(card_id));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
            dnd.cur_x_write.set(ev.client_x());
            dnd.cur_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough,
/// tracks the pointer while dragging
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && dnd.dragging_id_read.get_untracked().is_none() {
            let start_x = dnd.start_x_read.get_untracked();
            let start_y = dnd.start_y_read.get_untracked();
            let dx = (ev.client_x() - start_x).abs();
            let dy = (ev.client_y() - start_y).abs();

            // Start dragging if moved beyond threshold
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_id_write.set(pending);
            }
        }

        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.cur_x_write.set(ev.client_x());
            dnd.cur_y_write.set(ev.client_y());
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Bind global mouseup handler for release detection
///
/// `on_release(card_id, dx, dy)` fires with the accumulated drag delta while
/// the drag transform is still applied, so callers can measure the DOM.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_release: F)
where
    F: Fn(u32, i32, i32) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();

        // If we were actually dragging (not just clicking)
        if let Some(card_id) = dragging_id {
            let dx = dnd.cur_x_read.get_untracked() - dnd.start_x_read.get_untracked();
            let dy = dnd.cur_y_read.get_untracked() - dnd.start_y_read.get_untracked();
            on_release(card_id, dx, dy);
            end_drag(&dnd);
        } else {
            // Not dragging - clear any pending state, click fires naturally
            dnd.pending_id_write.set(None);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

/// Axis-aligned rectangle in viewport coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn from_dom(rect: &web_sys::DomRect) -> Self {
        Rect {
            left: rect.left(),
            top: rect.top(),
            right: rect.right(),
            bottom: rect.bottom(),
        }
    }
}

/// Adjust a proposed offset so `card` stays inside `bounds`.
/// When the card is larger than the bounds, the left/top edges win.
pub fn clamp_within(offset: (i32, i32), card: Rect, bounds: Rect) -> (i32, i32) {
    let (ox, oy) = offset;

    let mut dx = 0.0;
    if card.right > bounds.right {
        dx = bounds.right - card.right;
    }
    if card.left + dx < bounds.left {
        dx = bounds.left - card.left;
    }

    let mut dy = 0.0;
    if card.bottom > bounds.bottom {
        dy = bounds.bottom - card.bottom;
    }
    if card.top + dy < bounds.top {
        dy = bounds.top - card.top;
    }

    (ox + dx.round() as i32, oy + dy.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(left: f64, top: f64, right: f64, bottom: f64) -> Rect {
        Rect { left, top, right, bottom }
    }

    #[test]
    fn test_clamp_within_inside_unchanged() {
        let card = rect(10.0, 10.0, 110.0, 110.0);
        let bounds = rect(0.0, 0.0, 500.0, 500.0);
        assert_eq!(clamp_within((42, -7), card, bounds), (42, -7));
    }

    #[test]
    fn test_clamp_within_pulls_back_overflow() {
        let bounds = rect(0.0, 0.0, 500.0, 500.0);

        // Overflowing right/bottom gets pulled back by the overflow amount
        let card = rect(450.0, 480.0, 550.0, 580.0);
        assert_eq!(clamp_within((100, 100), card, bounds), (50, 20));

        // Overflowing left/top gets pushed forward
        let card = rect(-30.0, -10.0, 70.0, 90.0);
        assert_eq!(clamp_within((-100, -100), card, bounds), (-70, -90));
    }

    #[test]
    fn test_clamp_within_oversized_card_pins_left_top() {
        // Card wider and taller than bounds: left/top edge wins
        let card = rect(100.0, 100.0, 900.0, 900.0);
        let bounds = rect(0.0, 0.0, 500.0, 500.0);
        assert_eq!(clamp_within((0, 0), card, bounds), (-100, -100));
    }
}
