//! Typed HTTP client library for the poker room web API.
//!
//! The crate wraps the room's JSON endpoints in typed request/response
//! functions, organized as one endpoint group per functional area (account,
//! game, tournament, chat, messages, information, support, table reload).
//! A shared [`Session`] holds the authentication token set by a successful
//! login and stamps the contract headers on every request. The library is a
//! faithful pass-through: no retries, no caching, and no inspection of
//! server-reported business statuses.
//!
//! # Example
//!
//! ```no_run
//! use pokerroom_client::{Account, AccountApi, Game, GameApi, Session, TablesQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pokerroom_client::Error> {
//!     let session = Session::with_defaults()?;
//!     let account = Account::new(session.clone(), "https://room.example.com")?;
//!     let game = Game::new(session, "https://room.example.com")?;
//!
//!     let auth = account.authenticate("player", "secret", true).await?;
//!     println!("Logged in as {} ({})", auth.login, auth.status);
//!
//!     // The session token now rides on every request.
//!     let tables = game.get_tables(&TablesQuery::default()).await?;
//!     println!("{} tables in the lobby", tables.data.len());
//!
//!     Ok(())
//! }
//! ```

mod account;
mod chat;
mod error;
mod game;
mod information;
mod message;
mod session;
mod support;
mod table_reload;
mod tournament;
mod types;

pub use account::{
    Account, AccountApi, AccountHistoryQuery, AuthenticateResponse, OperationData,
    PersonalAccountData, PlayerDefinition, PlayerDefinitionProperties, RegisterGuestResponse,
    UserRating,
};
pub use chat::{Chat, ChatApi};
pub use error::Error;
pub use game::{
    AddBalanceResponse, Game, GameApi, GameTableModel, LobbyTableItem, SitResponse, TablesQuery,
};
pub use information::{
    AvatarsResponse, BannerData, Information, InformationApi, TournamentBetStructure,
    TournamentPrizeStructure, VersionCheckResponse,
};
pub use message::{InboxMessagesData, Message, MessageApi, MessagesQuery};
pub use session::{AUTH_TOKEN_HEADER, AUTH_TOKEN_RESPONSE_HEADER, Session, SessionConfig};
pub use support::{Support, SupportApi};
pub use table_reload::{TableReload, TableReloadApi, TableReloadInformation};
pub use tournament::{
    LobbyTournamentItem, Tournament, TournamentApi, TournamentDefinition, TournamentOptions,
    TournamentPlayerDefinition, TournamentPlayerStateDefinition, TournamentPlayerStatus,
    TournamentStatus, TournamentTableDefinition, TournamentTablePlayerDefinition,
    TournamentsQuery,
};
pub use types::{ApiResult, StatusResponse};
