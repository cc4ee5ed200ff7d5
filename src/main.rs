//! Todo Board Frontend Entry Point

mod app;
mod board;
mod components;
mod config;
mod context;
mod models;
mod storage;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    if let Err(e) = console_logger::init(level) {
        web_sys::console::warn_1(&format!("[APP] Logger already set: {}", e).into());
    }
    log::info!("[APP] Mounting board");

    mount_to_body(App);
}
