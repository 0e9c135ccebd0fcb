//! Add Card Form Component
//!
//! Modal form collecting every creation-time attribute of a card. Invalid
//! submissions are silent no-ops and the form stays open.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::{PrioritySelector, TagColorDropdown, TaskTypeSelector};
use crate::draft::{clamp_desc, parse_due_date, CardDraft, DESC_MAX_CHARS};
use crate::models::{FileMeta, NewCard, Priority, TagColor, TaskType};

/// Form for creating new cards
#[component]
pub fn AddCardForm(
    #[prop(into)] on_add: Callback<NewCard>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (desc, set_desc) = signal(String::new());
    let (priority, set_priority) = signal(Priority::None);
    let (tag_color, set_tag_color) = signal(TagColor::Green);
    let (task_type, set_task_type) = signal(None::<TaskType>);
    let (file, set_file) = signal(None::<FileMeta>);
    let (due_date_input, set_due_date_input) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = CardDraft {
            title: title.get(),
            desc: desc.get(),
            priority: priority.get(),
            tag_color: tag_color.get(),
            task_type: task_type.get(),
            file: file.get(),
            due_date: parse_due_date(&due_date_input.get()),
        };
        match draft.finish() {
            Some(new_card) => {
                on_add.run(new_card);
                on_close.run(());
            }
            None => {
                web_sys::console::log_1(
                    &"[FORM] Submission rejected: title, description and task type are required".into(),
                );
            }
        }
    };

    let on_file_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        let selected = input.files().and_then(|files| files.get(0));
        set_file.set(selected.map(|f| FileMeta {
            name: f.name(),
            size: f.size() as u64,
        }));
    };

    view! {
        <form class="add-card-form" on:submit=submit>
            <button type="button" class="close-btn" on:click=move |_| on_close.run(())>
                "×"
            </button>
            <h2>"Add New Card"</h2>
            <div class="form-grid">
                <div class="form-column">
                    <div class="form-field">
                        <label>"Title"</label>
                        <input
                            type="text"
                            placeholder="Enter card title"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label>"Description"</label>
                        <textarea
                            placeholder="Enter card description"
                            prop:value=move || desc.get()
                            on:input=move |ev| set_desc.set(clamp_desc(&event_target_value(&ev)))
                        ></textarea>
                        <p class="char-count">
                            {move || format!("{}/{} characters", desc.get().chars().count(), DESC_MAX_CHARS)}
                        </p>
                    </div>
                    <div class="form-field">
                        <label>"Priority"</label>
                        <PrioritySelector
                            current=priority
                            on_select=Callback::new(move |p: Priority| set_priority.set(p))
                        />
                    </div>
                    <div class="form-field">
                        <label>"Tag Color"</label>
                        <TagColorDropdown
                            current=tag_color
                            on_select=Callback::new(move |c: TagColor| set_tag_color.set(c))
                        />
                    </div>
                </div>
                <div class="form-column">
                    <div class="form-field">
                        <label>"Task Type" <span class="required">"*"</span></label>
                        <TaskTypeSelector
                            current=task_type
                            on_select=Callback::new(move |t: TaskType| set_task_type.set(Some(t)))
                        />
                    </div>
                    <div class="form-field">
                        <label>"Due Date"</label>
                        <input
                            type="date"
                            prop:value=move || due_date_input.get()
                            on:change=move |ev| set_due_date_input.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label>"Attachment"</label>
                        <input type="file" on:change=on_file_change />
                    </div>
                </div>
            </div>
            <button type="submit" class="submit-btn">"Add Card"</button>
        </form>
    }
}
