//! Container Card Component
//!
//! A colored column: header glyphs, draft input and its task rows.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::use_board;
use crate::models::Container;

#[component]
pub fn ContainerCard(container: Container) -> impl IntoView {
    let ctx = use_board();
    let id = container.id;

    // Keyed on every field the row renders, so a toggle or a shift in
    // index rebuilds the row with fresh values
    let rows = move || {
        ctx.board.with(|b| {
            b.tasks(id)
                .iter()
                .enumerate()
                .map(|(index, item)| (item.key, index, item.text.clone(), item.checked))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class=format!("container-card {}", container.color.css_class())>
            <div class="card-header">
                <button
                    class="card-delete"
                    title="Delete container"
                    on:click=move |_| ctx.delete_container(id)
                >
                    "×"
                </button>
                // No export yet; kept for layout parity
                <button class="card-download" title="Download" disabled=true>"⤓"</button>
            </div>

            <div class="card-input-row">
                <input
                    type="text"
                    placeholder="Enter your task..."
                    prop:value=move || ctx.board.with(|b| b.draft(id).to_string())
                    on:input=move |ev| ctx.set_draft(id, event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            ctx.submit_draft(id);
                        }
                    }
                />
                <button class="card-add" on:click=move |_| ctx.submit_draft(id)>"Add"</button>
            </div>

            <div class="card-tasks">
                <For
                    each=rows
                    key=|(key, index, _, checked)| (*key, *index, *checked)
                    children=move |(_, index, text, checked)| {
                        view! {
                            <TodoRow
                                container_id=id
                                index=index
                                text=text
                                checked=checked
                            />
                        }
                    }
                />
            </div>
        </div>
    }
}
