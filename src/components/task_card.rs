//! Task Card Component
//!
//! Draggable card with a display mode and an inline edit mode. All record
//! changes go through callbacks to the board, which owns the card list.

use leptos::html::Input;
use leptos::prelude::*;
use leptos_dragdrop::{drag_delta, make_on_mousedown};
use wasm_bindgen::JsCast;

use crate::components::{DeleteConfirmButton, PrioritySelector, TagColorDropdown, TaskTypeSelector};
use crate::context::BoardDndContext;
use crate::models::{Card, CardPatch, Priority, TagColor, TaskType};

/// Single card display/edit unit
#[component]
pub fn TaskCard(
    card: Card,
    /// Committed drag offset, owned by the board
    #[prop(into)] offset: Signal<(i32, i32)>,
    #[prop(into)] on_edit: Callback<(u32, CardPatch)>,
    #[prop(into)] on_delete: Callback<u32>,
    #[prop(into)] on_file_upload: Callback<(u32, web_sys::File)>,
) -> impl IntoView {
    let ctx = use_context::<BoardDndContext>().expect("BoardDndContext should be provided");
    let dnd = ctx.dnd;
    let id = card.id;

    let (editing, set_editing) = signal(false);
    let (edited_desc, set_edited_desc) = signal(String::new());
    let (edited_type, set_edited_type) = signal(card.task_type);
    let (edited_priority, set_edited_priority) = signal(card.priority);
    let (edited_color, set_edited_color) = signal(card.tag.tag_color);

    let file_input_ref = NodeRef::<Input>::new();

    // Display data for this render; the board re-creates the card view whenever
    // the record changes
    let desc = card.desc.clone();
    let task_type = card.task_type;
    let priority = card.priority;
    let due_date = card.due_date;
    let file_name = card.file.as_ref().map(|f| f.name.clone());
    let filesize = card.filesize.clone();
    let tag_is_open = card.tag.is_open;
    let tag_title = card.tag.tag_title.clone();
    let tag_color = card.tag.tag_color;

    // Entering edit mode seeds the editable fields from the current record;
    // toggling back out discards them
    let seed = card.edit_seed();
    let toggle_edit = move |_| {
        if editing.get_untracked() {
            set_editing.set(false);
        } else {
            set_edited_desc.set(seed.desc.clone());
            set_edited_type.set(seed.task_type);
            set_edited_priority.set(seed.priority);
            set_edited_color.set(seed.tag_color);
            set_editing.set(true);
        }
    };

    let save_edit = move |_| {
        on_edit.run((
            id,
            CardPatch {
                desc: edited_desc.get_untracked(),
                task_type: edited_type.get_untracked(),
                priority: edited_priority.get_untracked(),
                tag_color: edited_color.get_untracked(),
            },
        ));
        set_editing.set(false);
    };

    let pick_file = move || {
        // A drop that ends on the tag band must not open the picker
        if dnd.drag_just_ended_read.get_untracked() {
            return;
        }
        if let Some(input) = file_input_ref.get_untracked() {
            input.click();
        }
    };

    let on_file_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file_upload.run((id, file));
        }
    };

    let style = move || {
        let (ox, oy) = offset.get();
        let (dx, dy) = drag_delta(dnd, id);
        format!("transform: translate({}px, {}px);", ox + dx, oy + dy)
    };

    view! {
        <div
            id=format!("card-{}", id)
            class="task-card"
            class:editing=move || editing.get()
            class:dragging=move || dnd.dragging_id_read.get() == Some(id)
            style=style
            on:mousedown=make_on_mousedown(dnd, id)
        >
            <span class="card-icon">"🗂"</span>

            {move || if editing.get() {
                view! {
                    <div class="card-edit">
                        <input
                            type="text"
                            class="edit-desc-input"
                            prop:value=move || edited_desc.get()
                            on:input=move |ev| set_edited_desc.set(event_target_value(&ev))
                        />
                        <TaskTypeSelector
                            current=Signal::derive(move || Some(edited_type.get()))
                            on_select=Callback::new(move |t: TaskType| set_edited_type.set(t))
                        />
                        <PrioritySelector
                            current=edited_priority
                            on_select=Callback::new(move |p: Priority| set_edited_priority.set(p))
                        />
                        <TagColorDropdown
                            current=edited_color
                            on_select=Callback::new(move |c: TagColor| set_edited_color.set(c))
                        />
                        <button type="button" class="save-btn" on:click=save_edit>"Save"</button>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="card-body">
                        <p class="card-desc">{desc.clone()}</p>
                        <p class="card-meta">"Type: " {task_type.label()}</p>
                        <p class="card-meta">"Priority: " {priority.label()}</p>
                        {due_date.map(|d| view! {
                            <p class="card-meta">"Due: " {d.format("%Y-%m-%d").to_string()}</p>
                        })}
                    </div>
                }.into_any()
            }}

            {file_name.map(|name| view! {
                <div class="card-file">"📎 " {name}</div>
            })}

            <div class="card-footer">
                <div class="card-footer-row">
                    <h5 class="card-filesize">{filesize}</h5>
                    <div class="card-actions">
                        <button type="button" class="card-action-btn" on:click=move |_| pick_file()>
                            "📎"
                        </button>
                        <button type="button" class="card-action-btn" on:click=toggle_edit>
                            "✎"
                        </button>
                        <DeleteConfirmButton
                            button_class="card-action-btn"
                            on_confirm=Callback::new(move |_| on_delete.run(id))
                        />
                    </div>
                </div>

                {tag_is_open.then(|| {
                    let tag_class = format!("tag-band {}", tag_color.value());
                    view! {
                        // Clicking the tag band is a shortcut to the file picker
                        <div class=tag_class on:click=move |_| pick_file()>
                            <h3 class="tag-title">{tag_title}</h3>
                        </div>
                    }
                })}
            </div>

            <input
                type="file"
                class="hidden-file-input"
                node_ref=file_input_ref
                on:change=on_file_change
            />
        </div>
    }
}
