use serde::{Deserialize, Serialize};
use tower_sessions::Session;

const FLASH_KEY: &str = "flash";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FlashMessage {
    pub kind: String, // "success", "error", "info", "warning"
    pub message: String,
}

impl FlashMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: "success".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: "error".to_string(),
            message: message.into(),
        }
    }
}

/// Session extension for one-shot flash messages.
#[allow(async_fn_in_trait)]
pub trait FlashMessageStore {
    async fn set_flash(&self, message: FlashMessage) -> Result<(), tower_sessions::session::Error>;
    async fn take_flash(&self) -> Result<Option<FlashMessage>, tower_sessions::session::Error>;
}

impl FlashMessageStore for Session {
    async fn set_flash(&self, message: FlashMessage) -> Result<(), tower_sessions::session::Error> {
        self.insert(FLASH_KEY, message).await
    }

    async fn take_flash(&self) -> Result<Option<FlashMessage>, tower_sessions::session::Error> {
        self.remove::<FlashMessage>(FLASH_KEY).await
    }
}
