pub mod assets;
pub mod notes;
