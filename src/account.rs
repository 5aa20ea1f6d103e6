//! Account endpoint group: authentication, registration, profile and ledger.

use crate::error::Error;
use crate::session::{AUTH_TOKEN_RESPONSE_HEADER, Session, decode, normalize_base_url};
use crate::types::{ApiResult, StatusResponse};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;


/// Response for the authenticate API call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthenticateResponse {
    /// Server-reported status.
    pub status: String,
    /// Id of the authorized user, or 0 otherwise.
    pub id: u64,
    /// Whether this user is a guest.
    pub is_guest: bool,
    /// First name of the user.
    pub first_name: String,
    /// Last name of the user.
    pub last_name: String,
    /// Patronymic name of the user.
    pub patronymic_name: String,
    /// Login of the user.
    pub login: String,
    /// Money which the player has, one entry per currency.
    pub money: Vec<f64>,
    /// Email of the user.
    pub email: String,
    /// Country of the user.
    pub country: String,
    /// City of the user.
    pub city: String,
    /// Url of the image to display in the UI.
    pub image_url: String,
    /// Additional properties for the player.
    pub properties: HashMap<String, String>,
}

/// Personal account ledger summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonalAccountData {
    pub real_money: f64,
    pub real_money_reserve: f64,
    pub game_money: f64,
    pub game_money_reserve: f64,
    /// Amount of points.
    pub points: u64,
    pub last_income_date: String,
    pub last_income_amount: f64,
    pub last_request_number: u64,
}

/// Additional player profile properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerDefinitionProperties {
    pub language: String,
    pub points: String,
    pub stars: String,
}

/// Detailed player profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerDefinition {
    pub email: String,
    pub phone_number: String,
    pub first_name: String,
    pub last_name: String,
    pub real_money: f64,
    pub game_money: f64,
    pub points: u64,
    pub properties: PlayerDefinitionProperties,
}

/// One account ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OperationData {
    pub amount: f64,
    pub operation_date: String,
    pub operation: i32,
    pub comments: i64,
    pub booking_office: String,
    pub status: String,
}

/// Response for the guest registration API call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterGuestResponse {
    /// Server-reported status.
    pub status: String,
    pub user_id: u64,
    pub login: String,
    pub password: String,
}

/// One row of the best-players rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserRating {
    pub id: u64,
    pub login: String,
    pub points: u64,
    pub stars: u32,
}

/// Optional account-history filters. `None` fields are omitted from the
/// query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountHistoryQuery {
    /// Filter by start date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<String>,
    /// Filter by end date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<String>,
    /// Filter by minimum amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_amount: Option<i64>,
    /// Filter by maximum amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_amount: Option<i64>,
    /// Filter by operation type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct AuthenticateRequest<'a> {
    login: &'a str,
    password: &'a str,
    remember_me: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct ActivationRequest<'a> {
    token: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct ChangePasswordRequest<'a> {
    old_password: &'a str,
    new_password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterRequest<'a> {
    additional_properties: serde_json::Value,
    city: &'a str,
    country: u32,
    email: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    login: &'a str,
    password: &'a str,
    patronymic_name: &'a str,
    phone_number: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RegistrationCheckRequest<'a> {
    email: &'a str,
    login: &'a str,
    phone_number: &'a str,
}

#[derive(Debug, Serialize)]
struct RequestResetPasswordRequest<'a> {
    email: &'a str,
    login: &'a str,
}

#[derive(Debug, Serialize)]
struct ResetPasswordRequest<'a> {
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct SetAvatarUrlRequest<'a> {
    url: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateProfileRequest<'a> {
    phone_number: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    patronymic_name: &'a str,
    email: &'a str,
    country: u32,
    city: u32,
}

/// Operations of the account endpoint group.
#[allow(async_fn_in_trait)]
pub trait AccountApi {
    /// Logs in and stores the session token read from the `X-Auth-Token`
    /// response header.
    ///
    /// # Errors
    /// Returns error if the request fails or the body cannot be decoded.
    async fn authenticate(
        &self,
        login: &str,
        password: &str,
        remember_me: bool,
    ) -> Result<AuthenticateResponse, Error>;

    /// Logs out. The call carries no body.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn logout(&self) -> Result<StatusResponse, Error>;

    /// Activates an account with an activation token.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn activate_account(&self, login: &str, token: &str) -> Result<StatusResponse, Error>;

    /// Cancels a pending account activation.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn cancel_account_activation(
        &self,
        login: &str,
        token: &str,
    ) -> Result<StatusResponse, Error>;

    /// Changes the account password.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<StatusResponse, Error>;

    /// Gets the personal account ledger summary.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn get_account(&self) -> Result<ApiResult<PersonalAccountData>, Error>;

    /// Gets the detailed player profile.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn get_player(&self) -> Result<ApiResult<PlayerDefinition>, Error>;

    /// Gets the account operation history with optional filters.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn get_account_history(
        &self,
        query: &AccountHistoryQuery,
    ) -> Result<ApiResult<Vec<OperationData>>, Error>;

    /// Creates a guest account. The call carries no body.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn register_guest(&self) -> Result<RegisterGuestResponse, Error>;

    /// Creates a user account.
    ///
    /// # Errors
    /// Returns error if the request fails.
    #[allow(clippy::too_many_arguments)]
    async fn register(
        &self,
        login: &str,
        email: &str,
        password: &str,
        phone_number: &str,
        first_name: &str,
        last_name: &str,
        patronymic_name: &str,
        country: u32,
        city: &str,
        additional_properties: serde_json::Value,
    ) -> Result<StatusResponse, Error>;

    /// Checks whether a user with the given login, email and phone number
    /// could be created.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn registration_check(
        &self,
        login: &str,
        email: &str,
        phone_number: &str,
    ) -> Result<StatusResponse, Error>;

    /// Requests a password reset.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn request_reset_password(
        &self,
        login: &str,
        email: &str,
    ) -> Result<StatusResponse, Error>;

    /// Performs a password reset with a reset token.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn reset_password(&self, token: &str, new_password: &str)
    -> Result<StatusResponse, Error>;

    /// Resets the avatar to the default one.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn reset_avatar(&self) -> Result<StatusResponse, Error>;

    /// Points the avatar at an external image URL.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn set_avatar_url(&self, url: &str) -> Result<StatusResponse, Error>;

    /// Updates the player profile.
    ///
    /// # Errors
    /// Returns error if the request fails.
    #[allow(clippy::too_many_arguments)]
    async fn update_player_profile(
        &self,
        phone_number: &str,
        first_name: &str,
        last_name: &str,
        patronymic_name: &str,
        email: &str,
        country: u32,
        city: u32,
    ) -> Result<StatusResponse, Error>;

    /// Direct avatar upload. Deliberate placeholder: fails immediately with
    /// [`Error::NotImplemented`] and performs no network call.
    ///
    /// # Errors
    /// Always returns [`Error::NotImplemented`].
    async fn upload_avatar(&self, image: &[u8]) -> Result<StatusResponse, Error>;

    /// Gets the best-players rating.
    ///
    /// # Errors
    /// Returns error if the request fails.
    async fn get_best_players(&self) -> Result<ApiResult<Vec<UserRating>>, Error>;
}

/// Account endpoint group.
#[derive(Debug, Clone)]
pub struct Account {
    session: Session,
    base_url: String,
}

impl Account {
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

impl AccountApi for Account {
    async fn authenticate(
        &self,
        login: &str,
        password: &str,
        remember_me: bool,
    ) -> Result<AuthenticateResponse, Error> {
        let body = AuthenticateRequest {
            login,
            password,
            remember_me,
        };
        let url = format!("{}/api/account/my/login", self.base_url);
        let resp = self.session.post(&url).json(&body).send().await?;

        let token = resp
            .headers()
            .get(AUTH_TOKEN_RESPONSE_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        self.session.set_auth_token(token);

        decode(resp).await
    }

    async fn logout(&self) -> Result<StatusResponse, Error> {
        let url = format!("{}/api/account/my/logout", self.base_url);
        let resp = self.session.post(&url).send().await?;
        decode(resp).await
    }

    async fn activate_account(&self, login: &str, token: &str) -> Result<StatusResponse, Error> {
        let body = ActivationRequest { token };
        let url = format!("{}/api/activations/{}", self.base_url, login);
        let resp = self.session.post(&url).json(&body).send().await?;
        decode(resp).await
    }

    async fn cancel_account_activation(
        &self,
        login: &str,
        token: &str,
    ) -> Result<StatusResponse, Error> {
        let body = ActivationRequest { token };
        let url = format!("{}/api/activations/{}", self.base_url, login);
        let resp = self.session.delete(&url).json(&body).send().await?;
        decode(resp).await
    }

    async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<StatusResponse, Error> {
        let body = ChangePasswordRequest {
            old_password,
            new_password,
        };
        let url = format!("{}/api/account/my/password", self.base_url);
        let resp = self.session.post(&url).json(&body).send().await?;
        decode(resp).await
    }

    async fn get_account(&self) -> Result<ApiResult<PersonalAccountData>, Error> {
        let url = format!("{}/api/account/my", self.base_url);
        let resp = self.session.get(&url).send().await?;
        decode(resp).await
    }

    async fn get_player(&self) -> Result<ApiResult<PlayerDefinition>, Error> {
        let url = format!("{}/api/account/my/detailed", self.base_url);
        let resp = self.session.get(&url).send().await?;
        decode(resp).await
    }

    async fn get_account_history(
        &self,
        query: &AccountHistoryQuery,
    ) -> Result<ApiResult<Vec<OperationData>>, Error> {
        let mut url = format!("{}/api/account/my/history", self.base_url);
        let params = serde_urlencoded::to_string(query).unwrap_or_default();
        if !params.is_empty() {
            url.push_str(&format!("?{}", params));
        }
        let resp = self.session.get(&url).send().await?;
        decode(resp).await
    }

    async fn register_guest(&self) -> Result<RegisterGuestResponse, Error> {
        let url = format!("{}/api/registration/guests", self.base_url);
        let resp = self.session.post(&url).send().await?;
        decode(resp).await
    }

    async fn register(
        &self,
        login: &str,
        email: &str,
        password: &str,
        phone_number: &str,
        first_name: &str,
        last_name: &str,
        patronymic_name: &str,
        country: u32,
        city: &str,
        additional_properties: serde_json::Value,
    ) -> Result<StatusResponse, Error> {
        let body = RegisterRequest {
            additional_properties,
            city,
            country,
            email,
            first_name,
            last_name,
            login,
            password,
            patronymic_name,
            phone_number,
        };
        let url = format!("{}/api/registration", self.base_url);
        let resp = self.session.post(&url).json(&body).send().await?;
        decode(resp).await
    }

    async fn registration_check(
        &self,
        login: &str,
        email: &str,
        phone_number: &str,
    ) -> Result<StatusResponse, Error> {
        let body = RegistrationCheckRequest {
            email,
            login,
            phone_number,
        };
        let url = format!("{}/api/registration/check", self.base_url);
        let resp = self.session.post(&url).json(&body).send().await?;
        decode(resp).await
    }

    async fn request_reset_password(
        &self,
        login: &str,
        email: &str,
    ) -> Result<StatusResponse, Error> {
        let body = RequestResetPasswordRequest { email, login };
        let url = format!("{}/api/account/password-reset/requests", self.base_url);
        let resp = self.session.post(&url).json(&body).send().await?;
        decode(resp).await
    }

    async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<StatusResponse, Error> {
        let body = ResetPasswordRequest {
            password: new_password,
        };
        let url = format!(
            "{}/api/account/password-reset/requests/{}",
            self.base_url, token
        );
        let resp = self.session.post(&url).json(&body).send().await?;
        decode(resp).await
    }

    async fn reset_avatar(&self) -> Result<StatusResponse, Error> {
        // "accont" is what the server routes; the spelling is wire contract.
        let url = format!("{}/api/accont/avatar", self.base_url);
        let resp = self.session.delete(&url).send().await?;
        decode(resp).await
    }

    async fn set_avatar_url(&self, avatar_url: &str) -> Result<StatusResponse, Error> {
        let body = SetAvatarUrlRequest { url: avatar_url };
        let url = format!("{}/api/accont/avatar/url", self.base_url);
        let resp = self.session.put(&url).json(&body).send().await?;
        decode(resp).await
    }

    async fn update_player_profile(
        &self,
        phone_number: &str,
        first_name: &str,
        last_name: &str,
        patronymic_name: &str,
        email: &str,
        country: u32,
        city: u32,
    ) -> Result<StatusResponse, Error> {
        let body = UpdateProfileRequest {
            phone_number,
            first_name,
            last_name,
            patronymic_name,
            email,
            country,
            city,
        };
        let url = format!("{}/api/accont/profile", self.base_url);
        let resp = self.session.post(&url).json(&body).send().await?;
        decode(resp).await
    }

    async fn upload_avatar(&self, _image: &[u8]) -> Result<StatusResponse, Error> {
        Err(Error::NotImplemented)
    }

    async fn get_best_players(&self) -> Result<ApiResult<Vec<UserRating>>, Error> {
        let url = format!("{}/api/players/best", self.base_url);
        let resp = self.session.get(&url).send().await?;
        decode(resp).await
    }
}
