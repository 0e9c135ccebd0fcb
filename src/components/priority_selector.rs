//! Priority Selector Component
//!
//! Reusable priority selector buttons.

use leptos::prelude::*;

use crate::models::Priority;

/// Priority selector buttons
#[component]
pub fn PrioritySelector(
    #[prop(into)] current: Signal<Priority>,
    #[prop(into)] on_select: Callback<Priority>,
) -> impl IntoView {
    view! {
        <div class="type-selector">
            {Priority::ALL.iter().map(|priority| {
                let priority = *priority;
                let is_selected = move || current.get() == priority;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "type-btn active" } else { "type-btn" }
                        on:click=move |_| on_select.run(priority)
                    >
                        {priority.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
