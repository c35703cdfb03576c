use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{Duration, Utc};
use reqwest::header::AUTHORIZATION;
use url::Url;

use super::{Catalog, CatalogError, CatalogSession};
use crate::types::{Credential, TokenResponse};

/// Permissions requested from the user.
pub const SCOPES: [&str; 3] = [
    "playlist-modify-public",
    "playlist-modify-private",
    "playlist-read-private",
];

/// Seconds before expiry at which a credential is refreshed.
pub const REFRESH_BUFFER_SECS: i64 = 240;

impl Catalog {
    /// Builds the Spotify authorize URL.
    ///
    /// The consent screen is forced on every login (`show_dialog=true`), and
    /// `state` is echoed back to the callback so the login can be tied to
    /// the session that started it.
    pub fn authorization_url(&self, state: &str) -> Result<Url, CatalogError> {
        let credentials = self.credentials()?;
        let scope = SCOPES.join(" ");

        Url::parse_with_params(
            &self.auth_url,
            &[
                ("client_id", credentials.client_id.as_str()),
                ("response_type", "code"),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("scope", scope.as_str()),
                ("show_dialog", "true"),
                ("state", state),
            ],
        )
        .map_err(|e| CatalogError::Permanent(format!("invalid authorize URL: {e}")))
    }

    async fn request_token(&self, form: &[(&str, &str)]) -> Result<TokenResponse, CatalogError> {
        let credentials = self.credentials()?;
        let basic = STANDARD.encode(format!(
            "{}:{}",
            credentials.client_id, credentials.client_secret
        ));

        let request = self
            .http
            .post(&self.token_url)
            .header(AUTHORIZATION, format!("Basic {basic}"))
            .form(form);

        let response = self.send(request).await?;
        Ok(response.json::<TokenResponse>().await?)
    }
}

impl CatalogSession {
    /// Exchanges an authorization code for a credential.
    ///
    /// On success the session is bound to the new credential, replacing any
    /// previous one.
    pub async fn complete_authentication(&mut self, code: &str) -> Result<Credential, CatalogError> {
        let redirect_uri = self.catalog.redirect_uri.clone();
        let token = self
            .catalog
            .request_token(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", redirect_uri.as_str()),
            ])
            .await
            .inspect_err(|e| tracing::error!(error = %e, "authorization code exchange failed"))?;

        let credential = credential_from(token, None);
        self.credential = Some(credential.clone());
        tracing::info!(scope = %credential.scope, "Spotify authentication completed");
        Ok(credential)
    }

    /// Access token for the next call, refreshed when about to expire.
    ///
    /// If the refresh fails the credential is dropped, so the caller has to
    /// authenticate again.
    pub(crate) async fn access_token(&mut self) -> Result<String, CatalogError> {
        let Some(credential) = &self.credential else {
            return Err(CatalogError::NotAuthenticated);
        };

        if !credential.expires_within(REFRESH_BUFFER_SECS) {
            return Ok(credential.access_token.clone());
        }

        let refreshed = self.refresh().await.map(|c| c.access_token.clone());
        match refreshed {
            Ok(token) => Ok(token),
            Err(e) => {
                tracing::warn!(error = %e, "token refresh failed, session needs to log in again");
                self.credential = None;
                Err(CatalogError::NotAuthenticated)
            }
        }
    }

    /// Refreshes the credential with its refresh token.
    pub async fn refresh(&mut self) -> Result<&Credential, CatalogError> {
        let refresh_token = self
            .credential
            .as_ref()
            .map(|c| c.refresh_token.clone())
            .filter(|t| !t.is_empty())
            .ok_or(CatalogError::NotAuthenticated)?;

        let token = self
            .catalog
            .request_token(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token.as_str()),
            ])
            .await?;

        tracing::debug!("Spotify access token refreshed");
        let credential = self
            .credential
            .insert(credential_from(token, Some(refresh_token)));
        Ok(&*credential)
    }
}

// Spotify may omit the refresh token on refresh; keep the previous one then.
fn credential_from(token: TokenResponse, previous_refresh: Option<String>) -> Credential {
    Credential {
        access_token: token.access_token,
        refresh_token: token
            .refresh_token
            .or(previous_refresh)
            .unwrap_or_default(),
        scope: token.scope.unwrap_or_default(),
        expires_at: Utc::now() + Duration::seconds(token.expires_in),
    }
}
