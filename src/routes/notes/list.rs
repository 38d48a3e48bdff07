use crate::api::fetch_notes;
use crate::flash::{FlashMessage, FlashMessageStore};
use crate::state::AppState;
use crate::templates::{handle_template_error, ENV};
use crate::view::NoteListView;
use axum::{extract::State, response::Html};
use minijinja::context;
use tower_sessions::Session;

pub async fn route_notes(session: Session, State(state): State<AppState>) -> Html<String> {
    let api_addr: String = state.api_addr.clone();

    let view = match fetch_notes(&api_addr).await {
        Ok(notes) => NoteListView::from_notes(notes),
        Err(e) => {
            eprintln!("Failed to fetch notes: {:#?}", e);
            return Html(String::from("<h1>Error fetching notes</h1>"));
        }
    };

    // Get and remove flash message
    let flash = session.take_flash().await.unwrap_or(None);

    render_notes_page(&view, flash)
}

/// Render the notes page around an already-built list view.
pub fn render_notes_page(view: &NoteListView, flash: Option<FlashMessage>) -> Html<String> {
    let template = ENV.get_template("notes.html").unwrap_or_else(|e| {
        panic!("Failed to load template. Error: {:#}", e);
    });

    let rendered = match template.render(context!(
        notes_list => view.render(),
        note_count => view.len(),
        flash => flash,
    )) {
        Ok(result) => result,
        Err(err) => handle_template_error(err),
    };

    Html(rendered)
}
