//! Todo Board App
//!
//! Main application component: notice banner, container list and the
//! floating color picker.

use std::rc::Rc;

use leptos::prelude::*;

use crate::board::Board;
use crate::components::{ColorPicker, ContainerList, NoticeBanner};
use crate::config::BoardConfig;
use crate::context::BoardContext;
use crate::storage::BrowserStore;

#[component]
pub fn App() -> impl IntoView {
    let board = Board::load(Rc::new(BrowserStore), BoardConfig::default());

    // Provide context to all children
    provide_context(BoardContext::new(board));

    view! {
        <div class="board-layout">
            <NoticeBanner />
            <ContainerList />
            <ColorPicker />
        </div>
    }
}
