//! Tag Color Dropdown Component
//!
//! Dropdown with color swatches for picking the card tag color.

use leptos::prelude::*;

use crate::models::TagColor;

/// Tag color picker with a swatch dot per option
#[component]
pub fn TagColorDropdown(
    #[prop(into)] current: Signal<TagColor>,
    #[prop(into)] on_select: Callback<TagColor>,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="color-dropdown">
            <button
                type="button"
                class="color-dropdown-toggle"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <span
                    class="color-dot"
                    style=move || format!("background-color: {};", current.get().value())
                ></span>
                <span class="color-label">{move || current.get().label()}</span>
                <span class="color-caret">"▼"</span>
            </button>
            <Show when=move || open.get()>
                <div class="color-dropdown-list">
                    {TagColor::ALL.iter().map(|color| {
                        let color = *color;
                        view! {
                            <button
                                type="button"
                                class="color-option"
                                on:click=move |_| {
                                    on_select.run(color);
                                    set_open.set(false);
                                }
                            >
                                <span
                                    class="color-dot"
                                    style=format!("background-color: {};", color.value())
                                ></span>
                                {color.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
