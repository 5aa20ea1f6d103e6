//! Tournament endpoint group: lobby listing, registration, rebuys and addons.

use crate::error::Error;
use crate::session::{Session, decode, normalize_base_url};
use crate::types::{ApiResult, StatusResponse};
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Tournament lifecycle status. Travels as a JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TournamentStatus {
    Pending = 0,
    RegistrationStarted = 1,
    RegistrationCancelled = 2,
    SettingUp = 3,
    WaitingTournamentStart = 4,
    Started = 5,
    Completed = 6,
    Cancelled = 7,
    LateRegistration = 8,
}

impl From<TournamentStatus> for u8 {
    fn from(status: TournamentStatus) -> Self {
        status as u8
    }
}

impl TryFrom<u8> for TournamentStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::Pending,
            1 => Self::RegistrationStarted,
            2 => Self::RegistrationCancelled,
            3 => Self::SettingUp,
            4 => Self::WaitingTournamentStart,
            5 => Self::Started,
            6 => Self::Completed,
            7 => Self::Cancelled,
            8 => Self::LateRegistration,
            other => return Err(format!("unknown tournament status {other}")),
        })
    }
}

/// Player status within a tournament. Travels as a JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TournamentPlayerStatus {
    /// Player registered to play in the tournament.
    Registered = 0,
    /// Player cancelled the registration.
    RegistrationCancelled = 1,
    /// Player is currently playing in the tournament.
    Playing = 2,
    /// Player completed playing in the tournament.
    Completed = 3,
}

impl From<TournamentPlayerStatus> for u8 {
    fn from(status: TournamentPlayerStatus) -> Self {
        status as u8
    }
}

impl TryFrom<u8> for TournamentPlayerStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::Registered,
            1 => Self::RegistrationCancelled,
            2 => Self::Playing,
            3 => Self::Completed,
            other => return Err(format!("unknown tournament player status {other}")),
        })
    }
}

/// Bit mask of tournament payment options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TournamentOptions(pub u32);

impl TournamentOptions {
    pub const NONE: Self = Self(0);
    pub const HAS_BUY_IN: Self = Self(1);
    pub const HAS_ENTRY_FEE: Self = Self(2);
    pub const HAS_REBUY: Self = Self(4);
    pub const HAS_ADDON: Self = Self(8);
    pub const REBUY_GOES_TO_PRIZE_POOL: Self = Self(16);
    pub const REBUY_GOES_TO_CASINO: Self = Self(32);
    pub const ADDON_GOES_TO_PRIZE_POOL: Self = Self(64);
    pub const ADDON_GOES_TO_CASINO: Self = Self(128);

    /// Whether every bit of `flag` is set.
    #[must_use]
    pub const fn contains(self, flag: Self) -> bool {
        self.0 & flag.0 == flag.0
    }
}

/// Tournament row in the lobby listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LobbyTournamentItem {
    pub tournament_id: u64,
    #[serde(rename = "Type")]
    pub tournament_type: u32,
    pub tournament_name: String,
    pub is_registered: bool,
    pub currency_id: u32,
    pub registration_start_date: String,
    pub registration_end_date: String,
    pub start_date: String,
    pub end_date: String,
    pub finish_date: String,
    pub joined_players: u32,
    pub min_players: u32,
    pub max_players: u32,
    pub prize_amount: f64,
    pub status: TournamentStatus,
    pub prize_currency_id: u32,
    pub buy_in_amount: f64,
    pub entry_money_amount: f64,
    pub is_paused: bool,
}

/// Player's own standing in one tournament.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TournamentPlayerStateDefinition {
    pub tournament_id: u64,
    pub table_id: u64,
    pub status: TournamentStatus,
}

/// DTO for the tournament player information on a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TournamentTablePlayerDefinition {
    /// Id of the player.
    pub player_id: u64,
    /// Name of the player.
    pub player_name: String,
    /// Amount of money which the player currently has.
    pub player_money: f64,
}

/// DTO for the tournament table information.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TournamentTableDefinition {
    /// Unique id of the table.
    pub table_id: u64,
    /// Name of the table.
    pub table_name: String,
    /// Number of players which joined the game.
    pub joined_players: u32,
    /// Whether the table is closed.
    pub is_closed: bool,
    /// Players currently sitting on the table.
    pub players: Vec<TournamentTablePlayerDefinition>,
}

/// DTO for one player registered in a tournament.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TournamentPlayerDefinition {
    pub tournament_id: u64,
    pub tournament_name: String,
    pub player_id: u64,
    pub player_name: String,
    pub table_id: u64,
    pub status: TournamentPlayerStatus,
    pub prize: f64,
    pub stack: f64,
}

/// Full tournament definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TournamentDefinition {
    pub tournament_id: u64,
    pub tournament_name: String,
    pub description: String,
    #[serde(rename = "Type")]
    pub tournament_type: u32,
    pub currency_id: u32,
    pub prize_currency_id: u32,
    pub registration_start_date: String,
    pub registration_end_date: String,
    pub start_date: String,
    pub end_date: String,
    pub finish_date: String,
    pub joined_players: u32,
    pub tournament_tables: Vec<TournamentTableDefinition>,
    pub tournament_players: Vec<TournamentPlayerDefinition>,
    pub bet_level: u32,
    pub prize_amount: f64,
    /// Prize amount type, absent for fixed-prize tournaments.
    #[serde(default)]
    pub prize_amount_type: Option<i32>,
    pub collected_prize_amount: f64,
    pub join_fee: f64,
    pub buy_in: f64,
    pub starting_chips_amount: u64,
    pub well_known_bet_structure: u32,
    pub well_known_prize_structure: u32,
    pub blind_update_time: u32,
    pub is_rebuy_allowed: bool,
    pub rebuy_price: f64,
    pub rebuy_fee: f64,
    pub rebuy_period_time: u32,
    pub is_addon_allowed: bool,
    pub addon_price: f64,
    pub addon_fee: f64,
    pub addon_period_time: u32,
    pub pause_timeout: u32,
    pub options: TournamentOptions,
    pub maximum_amount_for_rebuy: f64,
    pub is_registered: bool,
    pub chips_added_at_re_buy: u64,
    pub chips_added_at_double_re_buy: u64,
    /// Amount of chips added at add-on.
    pub chips_added_at_add_on: u64,
    pub status: TournamentStatus,
    pub is_paused: bool,
    pub min_players: u32,
    pub max_players: u32,
}

/// Tournament lobby filters. Every filter always travels; the server treats
/// zero as "any".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TournamentsQuery {
    pub buy_in: u32,
    pub max_players: u32,
    pub prize_currency: u32,
    pub speed: u32,
    pub tournament_type: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct RebuyRequest {
    is_double_rebuy: bool,
}

/// Operations of the tournament endpoint group.
#[allow(async_fn_in_trait)]
pub trait TournamentApi {
    /// Lists lobby tournaments matching the filters.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn get_tournaments(
        &self,
        query: &TournamentsQuery,
    ) -> Result<ApiResult<Vec<LobbyTournamentItem>>, Error>;

    /// Gets one tournament by id.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn get_tournament(
        &self,
        tournament_id: u64,
    ) -> Result<ApiResult<TournamentDefinition>, Error>;

    /// Registers for a tournament. The call carries no body.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn register(&self, tournament_id: u64) -> Result<StatusResponse, Error>;

    /// Cancels a tournament registration.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn cancel_registration(&self, tournament_id: u64) -> Result<StatusResponse, Error>;

    /// Performs a rebuy, optionally a double one.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn rebuy(&self, tournament_id: u64, double: bool) -> Result<StatusResponse, Error>;

    /// Performs an addon. The call carries no body.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn addon(&self, tournament_id: u64) -> Result<StatusResponse, Error>;

    /// Lists the tournaments the player is registered in.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn get_registered_tournaments(
        &self,
    ) -> Result<ApiResult<Vec<TournamentPlayerStateDefinition>>, Error>;
}

/// Tournament endpoint group.
#[derive(Debug, Clone)]
pub struct Tournament {
    session: Session,
    base_url: String,
}

impl Tournament {
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

impl TournamentApi for Tournament {
    async fn get_tournaments(
        &self,
        query: &TournamentsQuery,
    ) -> Result<ApiResult<Vec<LobbyTournamentItem>>, Error> {
        let mut url = format!("{}/api/tournaments", self.base_url);
        let params = serde_urlencoded::to_string(query).unwrap_or_default();
        if !params.is_empty() {
            url.push_str(&format!("?{}", params));
        }
        let resp = self.session.get(&url).send().await?;
        decode(resp).await
    }

    async fn get_tournament(
        &self,
        tournament_id: u64,
    ) -> Result<ApiResult<TournamentDefinition>, Error> {
        let url = format!("{}/api/tournaments/{}", self.base_url, tournament_id);
        let resp = self.session.get(&url).send().await?;
        decode(resp).await
    }

    async fn register(&self, tournament_id: u64) -> Result<StatusResponse, Error> {
        let url = format!(
            "{}/api/tournaments/{}/registration",
            self.base_url, tournament_id
        );
        let resp = self.session.put(&url).send().await?;
        decode(resp).await
    }

    async fn cancel_registration(&self, tournament_id: u64) -> Result<StatusResponse, Error> {
        let url = format!(
            "{}/api/tournaments/{}/registration",
            self.base_url, tournament_id
        );
        let resp = self.session.delete(&url).send().await?;
        decode(resp).await
    }

    async fn rebuy(&self, tournament_id: u64, double: bool) -> Result<StatusResponse, Error> {
        let body = RebuyRequest {
            is_double_rebuy: double,
        };
        let url = format!("{}/api/tournaments/{}/rebuys", self.base_url, tournament_id);
        let resp = self.session.put(&url).json(&body).send().await?;
        decode(resp).await
    }

    async fn addon(&self, tournament_id: u64) -> Result<StatusResponse, Error> {
        let url = format!("{}/api/tournaments/{}/addons", self.base_url, tournament_id);
        let resp = self.session.put(&url).send().await?;
        decode(resp).await
    }

    async fn get_registered_tournaments(
        &self,
    ) -> Result<ApiResult<Vec<TournamentPlayerStateDefinition>>, Error> {
        let url = format!("{}/api/account/my/tournaments", self.base_url);
        let resp = self.session.get(&url).send().await?;
        decode(resp).await
    }
}
