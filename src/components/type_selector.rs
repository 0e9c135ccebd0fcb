//! Task Type Selector Component
//!
//! Reusable task type selector buttons.

use leptos::prelude::*;

use crate::models::TaskType;

/// Task type selector buttons
///
/// `current` is `None` while nothing has been picked yet (creation form).
#[component]
pub fn TaskTypeSelector(
    #[prop(into)] current: Signal<Option<TaskType>>,
    #[prop(into)] on_select: Callback<TaskType>,
) -> impl IntoView {
    view! {
        <div class="type-selector">
            {TaskType::ALL.iter().map(|task_type| {
                let task_type = *task_type;
                let is_selected = move || current.get() == Some(task_type);
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "type-btn active" } else { "type-btn" }
                        on:click=move |_| on_select.run(task_type)
                    >
                        {task_type.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
