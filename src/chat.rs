//! Chat endpoint group: table chat messages.

use crate::error::Error;
use crate::session::{Session, decode, normalize_base_url};
use crate::types::StatusResponse;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ChatMessageRequest<'a> {
    message: &'a str,
}

/// Operations of the chat endpoint group.
#[allow(async_fn_in_trait)]
pub trait ChatApi {
    /// Sends a chat message to a table.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn send(&self, table_id: u64, message: &str) -> Result<StatusResponse, Error>;
}

/// Chat endpoint group.
#[derive(Debug, Clone)]
pub struct Chat {
    session: Session,
    base_url: String,
}

impl Chat {
    /// Creates the group against a base address.
    ///
    /// # Errors
    /// Returns error if the base address is not a valid URL.
    pub fn new(session: Session, base_url: &str) -> Result<Self, Error> {
        Ok(Self {
            session,
            base_url: normalize_base_url(base_url)?,
        })
    }
}

impl ChatApi for Chat {
    async fn send(&self, table_id: u64, message: &str) -> Result<StatusResponse, Error> {
        let body = ChatMessageRequest { message };
        let url = format!("{}/api/table/{}/chat", self.base_url, table_id);
        let resp = self.session.post(&url).json(&body).send().await?;
        decode(resp).await
    }
}
