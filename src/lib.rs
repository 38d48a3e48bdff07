pub mod api;
pub mod deletion;
pub mod flash;
pub mod routes;
pub mod server;
pub mod state;
pub mod templates;
pub mod view;
