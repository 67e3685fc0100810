use parking_lot::Mutex;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalId {
    Register,
    ForgotPassword,
    CreateTask,
    ChangeName,
    ChangeEmail,
    ChangePassword,
}

/// Open/closed state of the modals on one page.
#[derive(Debug, Default)]
pub struct ModalController {
    open: Mutex<BTreeSet<ModalId>>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the modal was closed before.
    pub fn open(&self, id: ModalId) -> bool {
        self.open.lock().insert(id)
    }

    /// Returns `true` if the modal was open before.
    pub fn close(&self, id: ModalId) -> bool {
        self.open.lock().remove(&id)
    }

    pub fn is_open(&self, id: ModalId) -> bool {
        self.open.lock().contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_idempotent() {
        let modals = ModalController::new();
        assert!(modals.open(ModalId::ChangeName));
        assert!(!modals.open(ModalId::ChangeName));
        assert!(modals.close(ModalId::ChangeName));
        assert!(!modals.close(ModalId::ChangeName));
    }

    #[test]
    fn test_closing_one_leaves_others() {
        let modals = ModalController::new();
        modals.open(ModalId::ChangeName);
        modals.open(ModalId::ChangePassword);
        modals.close(ModalId::ChangeName);
        assert!(!modals.is_open(ModalId::ChangeName));
        assert!(modals.is_open(ModalId::ChangePassword));
    }
}
