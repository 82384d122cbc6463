//! UI-side models shared by components, plus re-exports of the API DTOs.

pub use cinedb_api_models::{Genre, Movie, MovieId, MovieInput};

use crate::core::ui::MessageKind;

/// Toast payload used by the host and the dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Severity classification.
    pub kind: MessageKind,
    /// Display message for the toast.
    pub message: String,
    /// Auto-dismiss delay in milliseconds; `0` keeps it until closed.
    pub duration_ms: u32,
}

impl Toast {
    /// Delay before the host hides the toast, `None` when it stays until closed.
    #[must_use]
    pub const fn auto_dismiss_after(&self) -> Option<u32> {
        if self.duration_ms > 0 {
            Some(self.duration_ms)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Toast;
    use crate::core::ui::MessageKind;

    #[test]
    fn zero_duration_never_expires() {
        let toast = Toast {
            id: 1,
            kind: MessageKind::Info,
            message: "sticky".to_string(),
            duration_ms: 0,
        };
        assert_eq!(toast.auto_dismiss_after(), None);
    }
}
