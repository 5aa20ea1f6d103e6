//! Message endpoint group: player-to-player mail.

use crate::error::Error;
use crate::session::{Session, decode, normalize_base_url};
use crate::types::{ApiResult, StatusResponse};
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// One page of mailbox messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InboxMessagesData {
    pub messages: Vec<String>,
}

/// Mailbox paging and filtering parameters. All of them always travel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagesQuery {
    pub page: u32,
    pub page_size: u32,
    pub sort_order: bool,
    pub filter: u32,
}

// The send body carries only the recipient and the subject; the message text
// is never transmitted. That asymmetry is the historical wire contract and
// is pinned by the integration tests.
#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    recepient: u64,
    subject: &'a str,
}

/// Operations of the message endpoint group.
#[allow(async_fn_in_trait)]
pub trait MessageApi {
    /// Sends a mail message to another player.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn send(&self, recepient: u64, subject: &str, body: &str)
    -> Result<StatusResponse, Error>;

    /// Lists inbox messages.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn get_inbox_messages(
        &self,
        query: &MessagesQuery,
    ) -> Result<ApiResult<InboxMessagesData>, Error>;

    /// Lists sent messages.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn get_sent_messages(
        &self,
        query: &MessagesQuery,
    ) -> Result<ApiResult<InboxMessagesData>, Error>;

    /// Gets one message by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn get_message(&self, id: u64) -> Result<ApiResult<InboxMessagesData>, Error>;
}

/// Message endpoint group.
#[derive(Debug, Clone)]
pub struct Message {
    session: Session,
    base_url: String,
}

impl Message {
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

impl MessageApi for Message {
    async fn send(
        &self,
        recepient: u64,
        subject: &str,
        body: &str,
    ) -> Result<StatusResponse, Error> {
        let _ = body;
        let request = SendMessageRequest { recepient, subject };
        let url = format!("{}/api/messages", self.base_url);
        let resp = self.session.post(&url).json(&request).send().await?;
        decode(resp).await
    }

    async fn get_inbox_messages(
        &self,
        query: &MessagesQuery,
    ) -> Result<ApiResult<InboxMessagesData>, Error> {
        let params = serde_urlencoded::to_string(query).unwrap_or_default();
        let url = format!("{}/api/messages/inbox?{}", self.base_url, params);
        let resp = self.session.get(&url).send().await?;
        decode(resp).await
    }

    async fn get_sent_messages(
        &self,
        query: &MessagesQuery,
    ) -> Result<ApiResult<InboxMessagesData>, Error> {
        let params = serde_urlencoded::to_string(query).unwrap_or_default();
        let url = format!("{}/api/messages/sent?{}", self.base_url, params);
        let resp = self.session.get(&url).send().await?;
        decode(resp).await
    }

    async fn get_message(&self, id: u64) -> Result<ApiResult<InboxMessagesData>, Error> {
        let url = format!("{}/api/message/{}", self.base_url, id);
        let resp = self.session.get(&url).send().await?;
        decode(resp).await
    }
}
