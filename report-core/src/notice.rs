use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub token: u64,
}

/// Single-slot transient notification. Each post bumps a generation
/// token; a dismiss only clears the slot when its token still matches,
/// so the timer of an overwritten notice cannot hide its replacement.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NoticeBoard {
    current: Option<Notice>,
    generation: u64,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&mut self, message: impl Into<String>) -> u64 {
        self.generation += 1;
        self.current = Some(Notice {
            message: message.into(),
            token: self.generation,
        });
        self.generation
    }

    pub fn dismiss(&mut self, token: u64) {
        if self.current.as_ref().is_some_and(|n| n.token == token) {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_replaces_the_current_notice() {
        let mut board = NoticeBoard::new();
        board.post("first");
        board.post("second");

        assert_eq!(board.current().expect("notice").message, "second");
    }

    #[test]
    fn matching_token_dismisses_its_own_notice() {
        let mut board = NoticeBoard::new();
        let token = board.post("only");
        board.dismiss(token);

        assert!(board.current().is_none());
    }

    #[test]
    fn stale_token_never_clears_a_newer_notice() {
        let mut board = NoticeBoard::new();
        let first = board.post("first");
        board.post("second");

        board.dismiss(first);
        assert_eq!(board.current().expect("notice").message, "second");
    }

    #[test]
    fn dismiss_on_an_empty_slot_is_a_no_op() {
        let mut board = NoticeBoard::new();
        board.dismiss(7);
        assert!(board.current().is_none());
    }
}
