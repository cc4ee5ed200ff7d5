//! Notice Banner Component
//!
//! Inline replacement for blocking alerts.

use leptos::prelude::*;

use crate::context::use_board;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_board();

    move || ctx.notice.get().map(|message| view! {
        <div class="notice-banner" role="alert">
            <span class="notice-text">{message}</span>
            <button class="notice-dismiss" on:click=move |_| ctx.dismiss_notice()>"×"</button>
        </div>
    })
}
