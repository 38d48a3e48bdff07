use axum::http::{header, StatusCode};
use axum::{extract::Path, response::IntoResponse};
use include_dir::{include_dir, Dir};

// Embed static files into the binary.
static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

pub async fn get_static_asset(Path(path): Path<String>) -> impl IntoResponse {
    match STATIC_DIR.get_file(&path) {
        Some(file) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime.as_ref().to_string())],
                file.contents(),
            )
                .into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "text/plain".to_string())],
            b"Not Found".as_slice(),
        )
            .into_response(),
    }
}
