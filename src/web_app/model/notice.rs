// web_app/model/notice.rs - User-facing notifications
//
// A notice is what the user sees after a submission changes state.
// Toasts is the ordered stack the toast component renders.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long success and error toasts stay on screen
pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Pending,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn pending(message: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Pending, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Error, message: message.into() }
    }

    /// Pending notices stay until their submission finishes.
    pub fn lifetime(&self) -> Option<Duration> {
        match self.kind {
            NoticeKind::Pending => None,
            NoticeKind::Success | NoticeKind::Error => Some(TOAST_LIFETIME),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

/// Notices currently on screen, oldest first
#[derive(Clone, Debug, Default)]
pub struct Toasts {
    next_id: u64,
    entries: Vec<(ToastId, Notice)>,
}

impl Toasts {
    pub fn push(&mut self, notice: Notice) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.entries.push((id, notice));
        id
    }

    /// Remove a toast. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[(ToastId, Notice)] {
        &self.entries
    }
}
