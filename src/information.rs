//! Information endpoint group: public server metadata. None of these calls
//! require authentication.

use crate::error::Error;
use crate::session::{Session, decode, normalize_base_url};
use crate::types::ApiResult;
use serde::{Deserialize, Serialize};


/// Prize distribution for a well-known prize structure level.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TournamentPrizeStructure {
    pub max_player: u32,
    pub prize_level: Vec<f64>,
}

/// One blind level of a well-known bet structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TournamentBetStructure {
    pub level: u32,
    pub small_blind: f64,
    pub big_blind: f64,
    pub ante: f64,
}

/// Promotional banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BannerData {
    /// Id of the banner.
    pub id: u64,
    /// Text representation of the banner.
    pub title: String,
    /// URL which could be used to retrieve the banner.
    pub url: String,
    /// URL to navigate to when the banner is clicked.
    pub link: String,
}

/// Response for the version check API call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VersionCheckResponse {
    /// Current version of the server API.
    pub server_api_version: u32,
    /// Minimum compatible version of the client API.
    pub minimum_client_api_version: u32,
}

/// Avatar listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AvatarsResponse {
    /// Server-reported status.
    pub status: String,
    pub avatars: Vec<String>,
}

/// Operations of the information endpoint group.
#[allow(async_fn_in_trait)]
pub trait InformationApi {
    /// Gets the well-known tournament bet structures.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn get_well_known_bet_structure(
        &self,
    ) -> Result<ApiResult<Vec<Vec<TournamentBetStructure>>>, Error>;

    /// Gets the well-known tournament prize structures.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn get_well_known_prize_structure(
        &self,
    ) -> Result<ApiResult<Vec<Vec<TournamentPrizeStructure>>>, Error>;

    /// Gets online player counts.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn get_online_players(&self) -> Result<ApiResult<Vec<u32>>, Error>;

    /// Requests the server date. The body is a bare JSON number.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn get_date(&self) -> Result<u64, Error>;

    /// Performs a version check.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn get_version(&self) -> Result<VersionCheckResponse, Error>;

    /// Gets the server layout description.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn get_server_layout(&self) -> Result<AvatarsResponse, Error>;

    /// Gets the default avatar set.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn get_default_avatars(&self) -> Result<AvatarsResponse, Error>;

    /// Gets the news feed.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn get_news(&self) -> Result<ApiResult<Vec<String>>, Error>;

    /// Gets banners for a display format.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn get_banners(&self, format: u32) -> Result<ApiResult<Vec<BannerData>>, Error>;
}

/// Information endpoint group.
#[derive(Debug, Clone)]
pub struct Information {
    session: Session,
    base_url: String,
}

impl Information {
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

impl InformationApi for Information {
    async fn get_well_known_bet_structure(
        &self,
    ) -> Result<ApiResult<Vec<Vec<TournamentBetStructure>>>, Error> {
        let url = format!("{}/api/information/bet-structure", self.base_url);
        let resp = self.session.get(&url).send().await?;
        decode(resp).await
    }

    async fn get_well_known_prize_structure(
        &self,
    ) -> Result<ApiResult<Vec<Vec<TournamentPrizeStructure>>>, Error> {
        let url = format!("{}/api/information/prize-structure", self.base_url);
        let resp = self.session.get(&url).send().await?;
        decode(resp).await
    }

    async fn get_online_players(&self) -> Result<ApiResult<Vec<u32>>, Error> {
        let url = format!("{}/api/information/players/online", self.base_url);
        let resp = self.session.get(&url).send().await?;
        decode(resp).await
    }

    async fn get_date(&self) -> Result<u64, Error> {
        let url = format!("{}/api/information/date", self.base_url);
        let resp = self.session.get(&url).send().await?;
        decode(resp).await
    }

    async fn get_version(&self) -> Result<VersionCheckResponse, Error> {
        let url = format!("{}/api/information/version", self.base_url);
        let resp = self.session.get(&url).send().await?;
        decode(resp).await
    }

    async fn get_server_layout(&self) -> Result<AvatarsResponse, Error> {
        let url = format!("{}/api/information/servers", self.base_url);
        let resp = self.session.get(&url).send().await?;
        decode(resp).await
    }

    async fn get_default_avatars(&self) -> Result<AvatarsResponse, Error> {
        let url = format!("{}/api/avatars/default", self.base_url);
        let resp = self.session.get(&url).send().await?;
        decode(resp).await
    }

    async fn get_news(&self) -> Result<ApiResult<Vec<String>>, Error> {
        let url = format!("{}/api/news", self.base_url);
        let resp = self.session.get(&url).send().await?;
        decode(resp).await
    }

    async fn get_banners(&self, format: u32) -> Result<ApiResult<Vec<BannerData>>, Error> {
        let url = format!("{}/api/banners/{}", self.base_url, format);
        let resp = self.session.get(&url).send().await?;
        decode(resp).await
    }
}
