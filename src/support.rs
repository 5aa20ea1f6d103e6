//! Support endpoint group: contact tickets.

use crate::error::Error;
use crate::session::{Session, decode, normalize_base_url};
use crate::types::StatusResponse;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContactUsRequest<'a> {
    full_name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

/// Operations of the support endpoint group.
#[allow(async_fn_in_trait)]
pub trait SupportApi {
    /// Opens a support ticket.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn contact_us(
        &self,
        full_name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> Result<StatusResponse, Error>;
}

/// Support endpoint group.
#[derive(Debug, Clone)]
pub struct Support {
    session: Session,
    base_url: String,
}

impl Support {
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

impl SupportApi for Support {
    async fn contact_us(
        &self,
        full_name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> Result<StatusResponse, Error> {
        let body = ContactUsRequest {
            full_name,
            email,
            subject,
            message,
        };
        let url = format!("{}/api/tickets", self.base_url);
        let resp = self.session.post(&url).json(&body).send().await?;
        decode(resp).await
    }
}
