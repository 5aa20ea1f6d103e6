//! Game endpoint group: lobby listing, seating and in-game actions.

use crate::error::Error;
use crate::session::{Session, decode, normalize_base_url};
use crate::types::{ApiResult, StatusResponse};
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Table information in the lobby.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LobbyTableItem {
    /// Unique id of the table.
    pub table_id: u64,
    /// Name of the table.
    pub table_name: String,
    pub small_blind: f64,
    pub big_blind: f64,
    pub joined_players: u32,
    pub max_players: u32,
    pub pot_limit_type: u32,
    pub average_pot_size: f64,
    pub hands_per_hour: f64,
    pub currency_id: u32,
    pub seat_mask: u32,
}

/// Detailed table information.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameTableModel {
    pub table_id: u64,
    pub table_name: String,
    pub small_blind: f64,
    pub big_blind: f64,
    pub average_pot_size: f64,
    pub currency_id: u32,
    pub hands_per_hour: f64,
    pub joined_players: u32,
    pub max_players: u32,
    pub pot_limit_type: u32,
    /// Id of the owning tournament for tournament tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament_id: Option<u64>,
}

/// Response for the sit API calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SitResponse {
    /// Server-reported status.
    pub status: String,
    /// Smallest buy-in the seat accepts.
    pub minimal_amount: f64,
}

/// Response for the add-balance API call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddBalanceResponse {
    /// Server-reported status.
    pub status: String,
    pub amount: f64,
}

/// Lobby listing filters. `None` fields are omitted from the query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TablesQuery {
    pub bet_levels: u32,
    /// Include full tables. Omitted when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_tables: Option<bool>,
    pub limit_type: u32,
    pub max_players: u32,
    pub money_type: u32,
    /// Private-table filter. Omitted when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_tables: Option<u32>,
    pub show_tournament_tables: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct SitRequest<'a> {
    amount: f64,
    ticket_code: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct AmountRequest {
    amount: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct WaitQueueSettingsRequest {
    wait_big_blind: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct TableParametersRequest {
    open_cards_automatically: bool,
}

/// Operations of the game endpoint group.
#[allow(async_fn_in_trait)]
pub trait GameApi {
    /// Lists lobby tables matching the filters.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn get_tables(&self, query: &TablesQuery) -> Result<ApiResult<Vec<LobbyTableItem>>, Error>;

    /// Gets one table by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn get_table_by_id(&self, table_id: u64) -> Result<ApiResult<GameTableModel>, Error>;

    /// Lists ids of the tables the player currently sits on.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn get_sitting_tables(&self) -> Result<ApiResult<Vec<u64>>, Error>;

    /// Queues for a specific seat.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn sit(
        &self,
        table_id: u64,
        seat: u32,
        amount: f64,
        ticket_code: &str,
    ) -> Result<SitResponse, Error>;

    /// Queues for any free seat.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn sit_anywhere(&self, table_id: u64, amount: f64) -> Result<SitResponse, Error>;

    /// Stands up from the table. The call carries no body.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn standup(&self, table_id: u64) -> Result<StatusResponse, Error>;

    /// Folds the current hand. The call carries no body.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn fold(&self, table_id: u64) -> Result<StatusResponse, Error>;

    /// Checks or calls the current bet. The call carries no body.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn check_or_call(&self, table_id: u64) -> Result<StatusResponse, Error>;

    /// Bets or raises by the given amount.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn bet_or_raise(&self, table_id: u64, amount: f64) -> Result<StatusResponse, Error>;

    /// Changes the wait-queue settings.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn change_wait_queue_settings(
        &self,
        table_id: u64,
        wait_big_blind: bool,
    ) -> Result<StatusResponse, Error>;

    /// Adds money to the table balance.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn add_balance(
        &self,
        table_id: u64,
        amount: f64,
        ticket_code: &str,
    ) -> Result<AddBalanceResponse, Error>;

    /// Sits out of the next hands.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn sit_out(&self, table_id: u64) -> Result<StatusResponse, Error>;

    /// Comes back from sitting out.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn come_back(&self, table_id: u64) -> Result<StatusResponse, Error>;

    /// Mucks both hole cards.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn muck(&self, table_id: u64) -> Result<StatusResponse, Error>;

    /// Shows both hole cards.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn show_cards(&self, table_id: u64) -> Result<StatusResponse, Error>;

    /// Shows a single hole card by position.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn show_hole_card(
        &self,
        table_id: u64,
        card_position: u32,
    ) -> Result<StatusResponse, Error>;

    /// Updates per-table client settings.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn set_table_parameters(
        &self,
        table_id: u64,
        open_cards_automatically: bool,
    ) -> Result<StatusResponse, Error>;
}

/// Game endpoint group.
#[derive(Debug, Clone)]
pub struct Game {
    session: Session,
    base_url: String,
}

impl Game {
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

impl GameApi for Game {
    async fn get_tables(
        &self,
        query: &TablesQuery,
    ) -> Result<ApiResult<Vec<LobbyTableItem>>, Error> {
        let mut url = format!("{}/api/tables", self.base_url);
        let params = serde_urlencoded::to_string(query).unwrap_or_default();
        if !params.is_empty() {
            url.push_str(&format!("?{}", params));
        }
        let resp = self.session.get(&url).send().await?;
        decode(resp).await
    }

    async fn get_table_by_id(&self, table_id: u64) -> Result<ApiResult<GameTableModel>, Error> {
        let url = format!("{}/api/tables/{}", self.base_url, table_id);
        let resp = self.session.get(&url).send().await?;
        decode(resp).await
    }

    async fn get_sitting_tables(&self) -> Result<ApiResult<Vec<u64>>, Error> {
        let url = format!("{}/api/account/my/tables", self.base_url);
        let resp = self.session.get(&url).send().await?;
        decode(resp).await
    }

    async fn sit(
        &self,
        table_id: u64,
        seat: u32,
        amount: f64,
        ticket_code: &str,
    ) -> Result<SitResponse, Error> {
        let body = SitRequest {
            amount,
            ticket_code,
        };
        let url = format!("{}/api/tables/{}/seats/{}/queue", self.base_url, table_id, seat);
        let resp = self.session.post(&url).json(&body).send().await?;
        decode(resp).await
    }

    async fn sit_anywhere(&self, table_id: u64, amount: f64) -> Result<SitResponse, Error> {
        let body = AmountRequest { amount };
        let url = format!("{}/api/tables/{}/seats/queue", self.base_url, table_id);
        let resp = self.session.post(&url).json(&body).send().await?;
        decode(resp).await
    }

    async fn standup(&self, table_id: u64) -> Result<StatusResponse, Error> {
        let url = format!("{}/api/tables/{}/seats/me", self.base_url, table_id);
        let resp = self.session.delete(&url).send().await?;
        decode(resp).await
    }

    async fn fold(&self, table_id: u64) -> Result<StatusResponse, Error> {
        let url = format!(
            "{}/api/tables/{}/game/current/actions/fold",
            self.base_url, table_id
        );
        let resp = self.session.post(&url).send().await?;
        decode(resp).await
    }

    async fn check_or_call(&self, table_id: u64) -> Result<StatusResponse, Error> {
        let url = format!(
            "{}/api/tables/{}/game/current/actions/check-call",
            self.base_url, table_id
        );
        let resp = self.session.post(&url).send().await?;
        decode(resp).await
    }

    async fn bet_or_raise(&self, table_id: u64, amount: f64) -> Result<StatusResponse, Error> {
        let body = AmountRequest { amount };
        let url = format!(
            "{}/api/tables/{}/game/current/actions/bet-raise",
            self.base_url, table_id
        );
        let resp = self.session.post(&url).json(&body).send().await?;
        decode(resp).await
    }

    async fn change_wait_queue_settings(
        &self,
        table_id: u64,
        wait_big_blind: bool,
    ) -> Result<StatusResponse, Error> {
        let body = WaitQueueSettingsRequest { wait_big_blind };
        let url = format!("{}/api/tables/{}/queue/settings", self.base_url, table_id);
        let resp = self.session.post(&url).json(&body).send().await?;
        decode(resp).await
    }

    async fn add_balance(
        &self,
        table_id: u64,
        amount: f64,
        ticket_code: &str,
    ) -> Result<AddBalanceResponse, Error> {
        let body = SitRequest {
            amount,
            ticket_code,
        };
        let url = format!("{}/api/tables/{}/balance", self.base_url, table_id);
        let resp = self.session.post(&url).json(&body).send().await?;
        decode(resp).await
    }

    async fn sit_out(&self, table_id: u64) -> Result<StatusResponse, Error> {
        let url = format!("{}/api/tables/{}/status/sit-out", self.base_url, table_id);
        let resp = self.session.put(&url).send().await?;
        decode(resp).await
    }

    async fn come_back(&self, table_id: u64) -> Result<StatusResponse, Error> {
        let url = format!("{}/api/tables/{}/status/sit-out", self.base_url, table_id);
        let resp = self.session.delete(&url).send().await?;
        decode(resp).await
    }

    async fn muck(&self, table_id: u64) -> Result<StatusResponse, Error> {
        let url = format!(
            "{}/api/tables/{}/game/current/hole-cards/both/visibility",
            self.base_url, table_id
        );
        let resp = self.session.delete(&url).send().await?;
        decode(resp).await
    }

    async fn show_cards(&self, table_id: u64) -> Result<StatusResponse, Error> {
        let url = format!(
            "{}/api/tables/{}/game/current/hole-cards/both/visibility",
            self.base_url, table_id
        );
        let resp = self.session.put(&url).send().await?;
        decode(resp).await
    }

    async fn show_hole_card(
        &self,
        table_id: u64,
        card_position: u32,
    ) -> Result<StatusResponse, Error> {
        let url = format!(
            "{}/api/tables/{}/game/current/hole-cards/{}/visibility",
            self.base_url, table_id, card_position
        );
        let resp = self.session.put(&url).send().await?;
        decode(resp).await
    }

    async fn set_table_parameters(
        &self,
        table_id: u64,
        open_cards_automatically: bool,
    ) -> Result<StatusResponse, Error> {
        let body = TableParametersRequest {
            open_cards_automatically,
        };
        let url = format!("{}/api/tables/{}/settings", self.base_url, table_id);
        let resp = self.session.put(&url).json(&body).send().await?;
        decode(resp).await
    }
}
