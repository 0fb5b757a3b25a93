//! Toast notifications.
//!
//! Toasts stack in insertion order and stay until clicked; there is no
//! auto-dismiss timer.

use leptos::prelude::*;

/// Visual style of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One notification entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Monotonically increasing id, unique within a session.
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Reactive stack of toasts, shared through the app shell.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Push a success toast.
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    /// Push an error toast.
    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|list| list.push(Toast { id, kind, message }));
    }

    /// Remove the toast with the given id, if still shown.
    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    /// Current entries, oldest first. Reactive when called inside a
    /// tracking scope.
    pub fn entries(&self) -> Vec<Toast> {
        self.toasts.get()
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_stack_in_order() {
        let toaster = Toaster::new();
        toaster.success("první");
        toaster.error("druhý");

        let entries = toaster.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "první");
        assert_eq!(entries[0].kind, ToastKind::Success);
        assert_eq!(entries[1].kind, ToastKind::Error);
    }

    #[test]
    fn test_dismiss_removes_only_the_clicked_toast() {
        let toaster = Toaster::new();
        toaster.success("a");
        toaster.success("b");
        let first_id = toaster.entries()[0].id;

        toaster.dismiss(first_id);
        let entries = toaster.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "b");
    }

    #[test]
    fn test_ids_are_unique_across_dismissals() {
        let toaster = Toaster::new();
        toaster.success("a");
        let id = toaster.entries()[0].id;
        toaster.dismiss(id);
        toaster.success("b");
        assert_ne!(toaster.entries()[0].id, id);
    }
}
