//! The note deletion handler: one backend call, one view update.

use crate::api::{self, NoteError, NoteId};
use crate::view::NoteListView;

/// What happened to the page after a deletion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The backend deleted the note and its row was removed from the view.
    RowRemoved,
    /// The backend deleted the note but no row matched the id; the page
    /// must be reloaded to resynchronize with server state.
    ReloadRequired,
    /// The deletion did not happen; the view is untouched and the note
    /// stays visible. Details went to the log, not the user.
    Failed,
}

/// Delete `id` on the backend and reflect the result in `view`.
///
/// Every failure is absorbed here: callers only see the outcome, never an
/// error. Invocations are independent; nothing dedupes or cancels
/// concurrent deletions.
pub async fn handle_delete(api_addr: &str, view: &mut NoteListView, id: &NoteId) -> DeleteOutcome {
    match api::delete_note(api_addr, id).await {
        Ok(()) => {
            if view.remove(id) {
                DeleteOutcome::RowRemoved
            } else {
                DeleteOutcome::ReloadRequired
            }
        }
        Err(NoteError::RequestRejected(status)) => {
            eprintln!("Failed to delete note {id}: server returned {status}");
            DeleteOutcome::Failed
        }
        Err(e) => {
            eprintln!("Error deleting note {id}: {e:#}");
            DeleteOutcome::Failed
        }
    }
}
