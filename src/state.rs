#[derive(Clone)]
pub struct AppState {
    pub api_addr: String,
}
