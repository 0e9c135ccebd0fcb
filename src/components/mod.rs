//! UI Components
//!
//! Reusable Leptos components.

mod add_card_form;
mod color_dropdown;
mod delete_confirm_button;
mod priority_selector;
mod task_card;
mod type_selector;

pub use add_card_form::AddCardForm;
pub use color_dropdown::TagColorDropdown;
pub use delete_confirm_button::DeleteConfirmButton;
pub use priority_selector::PrioritySelector;
pub use task_card::TaskCard;
pub use type_selector::TaskTypeSelector;
