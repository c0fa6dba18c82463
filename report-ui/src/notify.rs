use gloo_timers::callback::Timeout;
use leptos::*;
use report_core::notice::NoticeBoard;

pub const NOTICE_DISMISS_MS: u32 = 3_000;

/// Handle to the shared notification slot, passed to views via context.
#[derive(Clone, Copy)]
pub struct Notifier {
    board: RwSignal<NoticeBoard>,
}

impl Notifier {
    pub fn new(board: RwSignal<NoticeBoard>) -> Self {
        Self { board }
    }

    /// Shows the message and arms a dismiss timer bound to this notice's
    /// token. A notice that gets overwritten leaves its timer to expire
    /// inert instead of hiding the replacement.
    pub fn notify(&self, message: impl Into<String>) {
        let board = self.board;
        let Some(token) = board.try_update(|b| b.post(message.into())) else {
            return;
        };
        Timeout::new(NOTICE_DISMISS_MS, move || {
            board.update(|b| b.dismiss(token));
        })
        .forget();
    }
}
