//! Color Picker Component
//!
//! Floating "+" button that opens the palette for new containers.

use leptos::prelude::*;

use crate::context::use_board;
use crate::models::ContainerColor;

#[component]
pub fn ColorPicker() -> impl IntoView {
    let ctx = use_board();
    let is_open = move || ctx.board.with(|b| b.is_picker_open());

    view! {
        <button
            class="picker-toggle"
            title="New container"
            on:click=move |_| ctx.toggle_picker()
        >
            "+"
        </button>

        <Show when=is_open>
            <div class="picker-palette">
                {ContainerColor::PALETTE.iter().map(|color| {
                    let color = *color;
                    view! {
                        <button
                            class=format!("picker-swatch {}", color.css_class())
                            title=color.label()
                            on:click=move |_| ctx.add_container(color)
                        />
                    }
                }).collect_view()}
            </div>
        </Show>
    }
}
