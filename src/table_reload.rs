//! Table-reload endpoint group: crash-recovery diagnostics.
//!
//! Every call is wrapped in `tracing` debug events gated by a trace flag.
//! Tracing only observes; it never changes what a call returns.

use crate::error::Error;
use crate::session::{Session, decode, normalize_base_url};
use serde::{Deserialize, Serialize};
use tracing::debug;


/// Reload state of one table and its seats.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableReloadInformation {
    pub reload_required: bool,
    /// Whether the table itself was reloaded.
    pub table_reloaded: bool,
    pub seat1_reloaded: bool,
    pub seat2_reloaded: bool,
    pub seat3_reloaded: bool,
    pub seat4_reloaded: bool,
    pub seat5_reloaded: bool,
    pub seat6_reloaded: bool,
    pub seat7_reloaded: bool,
    pub seat8_reloaded: bool,
    pub seat9_reloaded: bool,
    pub seat10_reloaded: bool,
    pub emergency_reload: bool,
}

/// Operations of the table-reload endpoint group.
#[allow(async_fn_in_trait)]
pub trait TableReloadApi {
    /// Gets the reload state of a table.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn get_table_reload(&self, table_id: u64) -> Result<TableReloadInformation, Error>;

    /// Confirms an emergency reload of a table.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn confirm_emergency_reload(&self, table_id: u64) -> Result<(), Error>;

    /// Confirms a table reload.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn confirm_table_reload(&self, table_id: u64) -> Result<(), Error>;

    /// Confirms a seat reload.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn confirm_seat_reload(&self, table_id: u64, seat_id: u64) -> Result<(), Error>;
}

/// Table-reload endpoint group.
#[derive(Debug, Clone)]
pub struct TableReload {
    session: Session,
    base_url: String,
    trace_enabled: bool,
}

impl TableReload {
    /// Creates the group against a base address. Tracing starts disabled.
    ///
    /// # Errors
    /// Returns error if the base address is not a valid URL.
    pub fn new(session: Session, base_url: &str) -> Result<Self, Error> {
        Ok(Self {
            session,
            base_url: normalize_base_url(base_url)?,
            trace_enabled: false,
        })
    }

    /// Enables or disables diagnostic tracing.
    #[must_use]
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.trace_enabled = enabled;
        self
    }

    fn log(&self, event: &str) {
        if self.trace_enabled {
            debug!(target: "table_reload", "{event}");
        }
    }

    fn log_start(&self, event: &str) {
        self.log(&format!("Starting {event}"));
    }

    fn log_finish(&self, event: &str, status: reqwest::StatusCode) {
        self.log(&format!("Finish {event} with status {status}"));
    }
}

impl TableReloadApi for TableReload {
    async fn get_table_reload(&self, table_id: u64) -> Result<TableReloadInformation, Error> {
        let event = format!("Get table {table_id} reload");
        self.log_start(&event);

        let url = format!("{}/server/api/reload/{}", self.base_url, table_id);
        let resp = self.session.get(&url).send().await?;
        self.log_finish(&event, resp.status());

        let info: TableReloadInformation = decode(resp).await?;
        self.log(&format!(
            "Event {event} returned {}",
            serde_json::to_string(&info).unwrap_or_default()
        ));
        Ok(info)
    }

    async fn confirm_emergency_reload(&self, table_id: u64) -> Result<(), Error> {
        let event = "Confirm emergency reload";
        self.log_start(event);

        let url = format!(
            "{}/server/api/reload/{}/table/emergency",
            self.base_url, table_id
        );
        let resp = self.session.delete(&url).send().await?;
        self.log_finish(event, resp.status());
        Ok(())
    }

    async fn confirm_table_reload(&self, table_id: u64) -> Result<(), Error> {
        let event = format!("Confirm table {table_id} reload");
        self.log_start(&event);

        let url = format!("{}/server/api/reload/{}/table", self.base_url, table_id);
        let resp = self.session.put(&url).send().await?;
        self.log_finish(&event, resp.status());
        Ok(())
    }

    async fn confirm_seat_reload(&self, table_id: u64, seat_id: u64) -> Result<(), Error> {
        let event = format!("Confirm seat {seat_id} on table {table_id} reload");
        self.log_start(&event);

        let url = format!(
            "{}/server/api/reload/{}/seats/{}",
            self.base_url, table_id, seat_id
        );
        let resp = self.session.put(&url).send().await?;
        self.log_finish(&event, resp.status());
        Ok(())
    }
}
