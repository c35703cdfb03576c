use reqwest::{Client, Response, header::LOCATION, redirect::Policy};
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    Res,
    types::{BuildPlaylistRequest, ChartResponse, PlaylistReport, StatusResponse},
};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the bridge service.
///
/// Keeps the service's session cookie for the lifetime of the process and does
/// not follow redirects, so the Spotify authorize URL handed out by `/auth` can
/// be opened in a browser instead.
pub struct BridgeClient {
    http: Client,
    base_url: String,
}

impl BridgeClient {
    pub fn new(base_url: &str) -> Res<Self> {
        let http = Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn is_reachable(&self) -> bool {
        match self.http.get(self.url("/")).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    pub async fn status(&self) -> Res<StatusResponse> {
        let response = self.http.get(self.url("/api/status")).send().await?;
        decode(response).await
    }

    /// Spotify authorize URL for a login bound to this client's session.
    pub async fn login_url(&self) -> Res<String> {
        let response = self.http.get(self.url("/auth")).send().await?;

        if response.status().is_redirection() {
            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
                .ok_or("authentication redirect without location")?;
            return Ok(location.to_string());
        }

        Err(error_message(response).await.into())
    }

    pub async fn chart(&self, date: Option<&str>) -> Res<ChartResponse> {
        let mut request = self.http.get(self.url("/api/charts"));
        if let Some(date) = date {
            request = request.query(&[("date", date)]);
        }

        decode(request.send().await?).await
    }

    pub async fn create_playlist(&self, request: &BuildPlaylistRequest) -> Res<PlaylistReport> {
        let response = self
            .http
            .post(self.url("/api/create_playlist"))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Res<T> {
    if response.status().is_success() {
        return Ok(response.json::<T>().await?);
    }

    Err(error_message(response).await.into())
}

async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("Unexpected response from service ({status})"),
    }
}
