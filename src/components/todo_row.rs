//! Todo Row Component
//!
//! A single task inside a container card.

use leptos::prelude::*;

use crate::context::use_board;
use crate::models::ContainerId;

#[component]
pub fn TodoRow(
    container_id: ContainerId,
    index: usize,
    text: String,
    checked: bool,
) -> impl IntoView {
    let ctx = use_board();
    let input_id = format!("checkbox-input-{}-{}", container_id, index);

    view! {
        <div class="todo-row">
            <input
                type="checkbox"
                id=input_id.clone()
                class="custom-checkbox"
                checked=checked
                on:change=move |_| ctx.toggle_check(container_id, index)
            />
            <label for=input_id></label>
            <p class={if checked { "todo-text checked" } else { "todo-text" }}>{text}</p>
            <button
                class="todo-delete"
                title="Delete task"
                on:click=move |_| ctx.remove_task(container_id, index)
            >
                "×"
            </button>
        </div>
    }
}
