use crate::api::{fetch_notes, NoteId};
use crate::deletion::{handle_delete, DeleteOutcome};
use crate::routes::notes::list::render_notes_page;
use crate::state::AppState;
use crate::view::NoteListView;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};

pub async fn route_delete(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let api_addr: String = state.api_addr.clone();
    let id = NoteId::from(id);

    // Snapshot the list as the user last saw it, before the backend call.
    let mut view = match fetch_notes(&api_addr).await {
        Ok(notes) => NoteListView::from_notes(notes),
        Err(e) => {
            eprintln!("Failed to fetch notes: {:#?}", e);
            return Redirect::to("/").into_response();
        }
    };

    match handle_delete(&api_addr, &mut view, &id).await {
        // The row is gone from the view; everything else stays as it was.
        DeleteOutcome::RowRemoved => render_notes_page(&view, None).into_response(),
        // No matching row, resynchronize with a full reload.
        DeleteOutcome::ReloadRequired => Redirect::to("/").into_response(),
        // Deletion failed; the note stays visible and the user gets no
        // message beyond that.
        DeleteOutcome::Failed => render_notes_page(&view, None).into_response(),
    }
}
