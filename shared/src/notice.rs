use strum_macros::{AsRefStr, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Error,
}

impl NoticeLevel {
    pub fn classes(&self) -> &'static str {
        match self {
            NoticeLevel::Info => {
                "text-sm p-3 bg-blue-500/50 text-white rounded-lg transition duration-300"
            }
            NoticeLevel::Error => {
                "text-sm p-3 bg-red-500/50 text-white rounded-lg transition duration-300"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub text: String,
}

/// The page's single message box. A newer notice replaces the visible one.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    current: Option<Notice>,
    next_id: u64,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `text` and returns the id the auto-hide timer must present to
    /// [`NoticeBoard::dismiss`].
    pub fn show(&mut self, level: NoticeLevel, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.current = Some(Notice { id: self.next_id, level, text: text.into() });
        self.next_id
    }

    /// Hides the notice only if it is still the one `id` refers to.
    pub fn dismiss(&mut self, id: u64) -> bool {
        match &self.current {
            Some(notice) if notice.id == id => {
                self.current = None;
                true
            }
            _ => false,
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
    fn stale_timer_does_not_hide_newer_notice() {
        let mut board = NoticeBoard::new();
        let first = board.show(NoticeLevel::Error, "first");
        let second = board.show(NoticeLevel::Info, "second");

        assert!(!board.dismiss(first));
        assert_eq!(board.current().map(|n| n.text.as_str()), Some("second"));

        assert!(board.dismiss(second));
        assert!(board.current().is_none());
    }

    #[test]
    fn level_classes_differ() {
        assert!(NoticeLevel::Error.classes().contains("bg-red-500/50"));
        assert!(NoticeLevel::Info.classes().contains("bg-blue-500/50"));
        assert_eq!(NoticeLevel::Error.as_ref(), "error");
    }
}
