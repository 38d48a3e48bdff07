use crate::api::{Note, NoteId};
use std::fmt::Write;

/// The notes list as rendered on the page.
///
/// Each row carries a `data-note-id` attribute holding the full identifier,
/// so lookups are exact matches; an id of `"1"` can never select the row for
/// `"12"`.
#[derive(Debug, Clone)]
pub struct NoteListView {
    rows: Vec<NoteRow>,
}

#[derive(Debug, Clone)]
pub struct NoteRow {
    pub id: NoteId,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl NoteListView {
    pub fn from_notes(notes: Vec<Note>) -> Self {
        Self {
            rows: notes
                .into_iter()
                .map(|note| NoteRow {
                    id: note.id,
                    content: note.content,
                    created_at: note.created_at,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, id: &NoteId) -> bool {
        self.rows.iter().any(|row| &row.id == id)
    }

    /// Remove the row for `id`, leaving every other row in place.
    ///
    /// Returns false when no row matches, in which case the view is
    /// untouched and the caller is expected to reload the whole page.
    pub fn remove(&mut self, id: &NoteId) -> bool {
        match self.rows.iter().position(|row| &row.id == id) {
            Some(index) => {
                self.rows.remove(index);
                true
            }
            None => false,
        }
    }

    /// Render the `<ul id="notes">` list the page displays.
    pub fn render(&self) -> String {
        let mut html = String::new();
        write!(
            html,
            r#"<ul id="notes" class="menu bg-base-200 rounded-box w-full">"#
        )
        .unwrap();

        for row in &self.rows {
            render_row(&mut html, row);
        }

        html.push_str("</ul>");
        html
    }
}

fn render_row(html: &mut String, row: &NoteRow) {
    let id_attr = html_escape::encode_double_quoted_attribute(row.id.as_str());

    write!(
        html,
        r#"<li class="note-item" data-note-id="{}">"#,
        id_attr
    )
    .unwrap();

    write!(
        html,
        r#"<span class="note-content">{}</span>"#,
        html_escape::encode_text(&row.content)
    )
    .unwrap();

    write!(
        html,
        r#"<span class="note-date">{}</span>"#,
        row.created_at.format("%Y-%m-%d %H:%M")
    )
    .unwrap();

    write!(
        html,
        r#"<form method="post" action="/note/{}/delete"><button type="submit" class="btn btn-xs btn-error">Delete</button></form></li>"#,
        id_attr
    )
    .unwrap();
}
