//! Application Context
//!
//! The board and the notice banner, provided via Leptos Context API.
//! Components call the action methods here instead of touching `Board`
//! directly so errors are surfaced the same way everywhere.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos_dragdrop::DropTarget;

use crate::board::{Board, BoardError};
use crate::models::{ContainerColor, ContainerId};

#[derive(Clone, Copy)]
pub struct BoardContext {
    /// Board state (not `Send`, so kept in local storage)
    pub board: RwSignal<Board, LocalStorage>,
    /// Message for the notice banner - read
    pub notice: ReadSignal<Option<String>>,
    /// Message for the notice banner - write
    set_notice: WriteSignal<Option<String>>,
    /// Bumped per notice so an old timer can't clear a newer message
    notice_seq: RwSignal<u32>,
    notice_timeout_ms: u32,
}

impl BoardContext {
    pub fn new(board: Board) -> Self {
        let notice_timeout_ms = board.config().notice_timeout_ms;
        let (notice, set_notice) = signal(None::<String>);
        Self {
            board: RwSignal::new_local(board),
            notice,
            set_notice,
            notice_seq: RwSignal::new(0),
            notice_timeout_ms,
        }
    }

    pub fn add_container(&self, color: ContainerColor) {
        self.board.update(|b| {
            b.pick_color(color);
        });
    }

    pub fn delete_container(&self, id: ContainerId) {
        self.board.update(|b| b.delete_container(id));
    }

    pub fn move_container(&self, id: ContainerId, target: DropTarget) {
        log::debug!("[DND] Drop container {} on {:?}", id, target);
        self.report(self.board.try_update(|b| b.move_container(id, target)));
    }

    pub fn set_draft(&self, id: ContainerId, text: String) {
        self.board.update(|b| b.set_draft(id, text));
    }

    pub fn submit_draft(&self, id: ContainerId) {
        self.report(self.board.try_update(|b| b.submit_draft(id)));
    }

    pub fn toggle_check(&self, id: ContainerId, index: usize) {
        self.board.update(|b| b.toggle_check(id, index));
    }

    pub fn remove_task(&self, id: ContainerId, index: usize) {
        self.report(self.board.try_update(|b| b.remove_task(id, index)));
    }

    pub fn toggle_picker(&self) {
        self.board.update(Board::toggle_picker);
    }

    /// Show a message in the banner; it clears itself after the timeout
    pub fn show_notice(&self, message: String) {
        let seq = self.notice_seq.get_untracked().wrapping_add(1);
        self.notice_seq.set(seq);
        self.set_notice.set(Some(message));

        let set_notice = self.set_notice;
        let notice_seq = self.notice_seq;
        Timeout::new(self.notice_timeout_ms, move || {
            if notice_seq.get_untracked() == seq {
                set_notice.set(None);
            }
        })
        .forget();
    }

    pub fn dismiss_notice(&self) {
        self.set_notice.set(None);
    }

    fn report(&self, result: Option<Result<(), BoardError>>) {
        match result {
            Some(Err(e)) if e.is_user_facing() => {
                log::info!("[BOARD] Rejected: {}", e);
                self.show_notice(e.to_string());
            }
            Some(Err(e)) => log::warn!("[BOARD] {}", e),
            Some(Ok(())) => self.dismiss_notice(),
            None => log::warn!("[BOARD] Board signal disposed"),
        }
    }
}

/// Get the board context
pub fn use_board() -> BoardContext {
    expect_context::<BoardContext>()
}
