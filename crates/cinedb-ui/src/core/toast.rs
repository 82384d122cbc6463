//! Single-slot toast state.
//!
//! # Design
//! - At most one toast is visible; showing a new one replaces it.
//! - Every toast gets a fresh id so a timer armed for a replaced toast
//!   cannot hide its successor.
//! - Manual dismissal clears the slot regardless of elapsed time.

use crate::core::ui::MessageKind;
use crate::models::Toast;
use std::rc::Rc;
use yew::Reducible;

/// Auto-dismiss delay applied to dashboard toasts.
pub const TOAST_DURATION_MS: u32 = 3000;

/// Slot holding the currently visible toast, if any.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ToastSlot {
    current: Option<Toast>,
    last_id: u64,
}

/// Transitions accepted by [`ToastSlot`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToastAction {
    /// Show a toast, replacing any visible one.
    Show {
        /// Severity of the toast.
        kind: MessageKind,
        /// Message body.
        message: String,
    },
    /// User closed the toast.
    Dismiss,
    /// The auto-dismiss timer for the given toast fired.
    Expire(u64),
}

impl ToastSlot {
    /// Currently visible toast.
    #[must_use]
    pub const fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Whether a toast is on screen.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Show a toast with the default duration and return its id.
    pub fn show(&mut self, kind: MessageKind, message: impl Into<String>) -> u64 {
        self.last_id += 1;
        self.current = Some(Toast {
            id: self.last_id,
            kind,
            message: message.into(),
            duration_ms: TOAST_DURATION_MS,
        });
        self.last_id
    }

    /// Hide the visible toast immediately.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Hide the toast with `id` if it is still the visible one.
    ///
    /// Returns `true` when the slot was cleared.
    pub fn expire(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|toast| toast.id == id) {
            self.current = None;
            return true;
        }
        false
    }

    /// Apply a [`ToastAction`] in place.
    pub fn apply(&mut self, action: ToastAction) {
        match action {
            ToastAction::Show { kind, message } => {
                self.show(kind, message);
            }
            ToastAction::Dismiss => self.dismiss(),
            ToastAction::Expire(id) => {
                self.expire(id);
            }
        }
    }
}

impl Reducible for ToastSlot {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::{TOAST_DURATION_MS, ToastAction, ToastSlot};
    use crate::core::ui::MessageKind;
    use std::rc::Rc;
    use yew::Reducible;

    #[test]
    fn show_replaces_visible_toast() {
        let mut slot = ToastSlot::default();
        let first = slot.show(MessageKind::Success, "Película creada exitosamente");
        let second = slot.show(MessageKind::Error, "Error al crear la película");
        assert_ne!(first, second);
        let current = slot.current().expect("toast visible");
        assert_eq!(current.id, second);
        assert_eq!(current.kind, MessageKind::Error);
        assert_eq!(current.duration_ms, TOAST_DURATION_MS);
    }

    #[test]
    fn stale_timer_does_not_hide_replacement() {
        let mut slot = ToastSlot::default();
        let first = slot.show(MessageKind::Info, "uno");
        let second = slot.show(MessageKind::Info, "dos");
        assert!(!slot.expire(first));
        assert!(slot.is_visible());
        assert!(slot.expire(second));
        assert!(!slot.is_visible());
    }

    #[test]
    fn manual_dismiss_hides_immediately() {
        let mut slot = ToastSlot::default();
        let id = slot.show(MessageKind::Success, "ok");
        slot.dismiss();
        assert!(!slot.is_visible());
        assert!(!slot.expire(id));
    }

    #[test]
    fn shown_toast_auto_dismisses_after_its_duration() {
        let mut slot = ToastSlot::default();
        slot.show(MessageKind::Info, "hola");
        let toast = slot.current().expect("toast visible");
        assert_eq!(toast.auto_dismiss_after(), Some(TOAST_DURATION_MS));
    }

    #[test]
    fn reducer_routes_actions() {
        let slot = Rc::new(ToastSlot::default());
        let slot = slot.reduce(ToastAction::Show {
            kind: MessageKind::Warning,
            message: "cuidado".to_string(),
        });
        let id = slot.current().map(|toast| toast.id).expect("toast visible");
        let slot = slot.reduce(ToastAction::Expire(id));
        assert!(!slot.is_visible());
    }
}
