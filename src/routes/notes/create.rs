use crate::api::{create_note, CreateNoteRequest};
use crate::flash::{FlashMessage, FlashMessageStore};
use crate::state::AppState;
use axum::{extract::State, response::Redirect, Form};
use tower_sessions::Session;

#[derive(Debug, serde::Deserialize)]
pub struct NewNoteForm {
    #[serde(default)]
    note: String,
}

pub async fn route_create(
    session: Session,
    State(state): State<AppState>,
    Form(form): Form<NewNoteForm>,
) -> Redirect {
    let api_addr: String = state.api_addr.clone();

    if form.note.is_empty() {
        session
            .set_flash(FlashMessage::error("Note too short!"))
            .await
            .unwrap();
        return Redirect::to("/");
    }

    let create_request = CreateNoteRequest { content: form.note };

    match create_note(&api_addr, create_request).await {
        Ok(()) => {
            session
                .set_flash(FlashMessage::success("Note added successfully"))
                .await
                .unwrap();
        }
        Err(e) => {
            session
                .set_flash(FlashMessage::error(format!("Failed to add note: {}", e)))
                .await
                .unwrap();
        }
    }

    Redirect::to("/")
}
