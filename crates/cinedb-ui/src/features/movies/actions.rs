//! Movie dashboard actions.
//!
//! # Design
//! - Capture user intent separate from rendering.
//! - Toast copy for each mutation outcome lives next to the mutation kind.

use crate::core::toast::ToastAction;
use crate::core::ui::MessageKind;
use crate::models::MovieId;
use crate::services::error::ApiResult;
use yew::Callback;

/// Prompt shown before any delete request.
pub const DELETE_CONFIRMATION: &str = "¿Estás seguro de que quieres eliminar esta película?";

/// High-level card and toolbar actions from the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MovieAction {
    /// Open the form for a new movie.
    New,
    /// Open the form for the movie with this id.
    Edit(MovieId),
    /// Delete the movie with this id after confirmation.
    Delete(MovieId),
}

/// Mutation kinds issued by the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationKind {
    /// `POST`.
    Create,
    /// `PUT`.
    Update,
    /// `DELETE`.
    Delete,
}

impl MutationKind {
    /// Toast copy after the backend accepted the mutation.
    #[must_use]
    pub const fn success_message(self) -> &'static str {
        match self {
            Self::Create => "Película creada exitosamente",
            Self::Update => "Película actualizada exitosamente",
            Self::Delete => "Película eliminada exitosamente",
        }
    }

    /// Toast copy after the mutation failed.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Create => "Error al crear la película",
            Self::Update => "Error al actualizar la película",
            Self::Delete => "Error al eliminar la película",
        }
    }
}

/// Ask `confirm` exactly once and return the id to delete when accepted.
pub fn confirm_delete(id: MovieId, confirm: impl FnOnce(&str) -> bool) -> Option<MovieId> {
    confirm(DELETE_CONFIRMATION).then_some(id)
}

/// Apply the dashboard post-conditions to a resolved mutation.
///
/// Success refetches the list once and shows the success toast; failure only
/// shows the error toast and leaves the cached list alone.
pub fn settle_mutation<T>(
    kind: MutationKind,
    result: ApiResult<T>,
    refetch: &Callback<()>,
    toasts: &Callback<ToastAction>,
) -> Option<T> {
    let (value, toast) = match result {
        Ok(value) => {
            refetch.emit(());
            (Some(value), (MessageKind::Success, kind.success_message()))
        }
        Err(_) => (None, (MessageKind::Error, kind.failure_message())),
    };
    let (kind, message) = toast;
    toasts.emit(ToastAction::Show {
        kind,
        message: message.to_string(),
    });
    value
}
