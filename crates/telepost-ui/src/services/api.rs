//! Authenticated HTTP client for the channels backend.
//!
//! Every operation funnels through [`ApiClient::send`], which attaches the
//! stored credential and applies the unauthorized-interception policy: a 401
//! from any endpoint evicts the credential, forces navigation to the login
//! screen, and still rejects the in-flight call so the caller's failure path
//! fires. New operations inherit the policy by construction.

use crate::app::session;
use crate::core::auth::authorization_value;
use crate::core::error::ApiError;
use crate::core::logic::{
    active_path, channel_path, check_path, create_path, delete_path, intercept_status, list_path,
    update_path,
};
use crate::features::channels::state::ChannelRow;
use gloo_net::http::{Request, Response};
use telepost_api_models::{Channel, ChannelList, NewChannel};

/// HTTP client bound to a fixed backend origin.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given backend origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(request: Request) -> Request {
        match session::load_token() {
            Some(token) => request.header("Authorization", &authorization_value(&token)),
            None => request,
        }
    }

    async fn send(&self, request: Request) -> Result<Response, ApiError> {
        let response = Self::authorize(request)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        intercept_status(
            response.status(),
            response.ok(),
            &session::BrowserCredentials,
            session::redirect_to_login,
        )?;
        Ok(response)
    }

    async fn get(&self, path: &str) -> Result<Response, ApiError> {
        self.send(Request::get(&self.url(path))).await
    }

    async fn post_empty(&self, path: &str) -> Result<Response, ApiError> {
        self.send(Request::post(&self.url(path))).await
    }

    /// Fetch the full channel collection as list rows.
    ///
    /// # Errors
    /// Any [`ApiError`]; the caller keeps its current rows on failure.
    pub async fn fetch_channels(&self) -> Result<Vec<ChannelRow>, ApiError> {
        let list: ChannelList = self
            .get(list_path())
            .await?
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok(list.channels.into_iter().map(ChannelRow::from).collect())
    }

    /// Fetch a single channel for edit pre-fill.
    ///
    /// # Errors
    /// [`ApiError::NotFound`] when the backend has no such channel, otherwise
    /// any transport or decode failure.
    pub async fn fetch_channel(&self, id: i64) -> Result<Channel, ApiError> {
        let channel: Option<Channel> = self
            .get(&channel_path(id))
            .await?
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        channel.ok_or(ApiError::NotFound)
    }

    /// Create a channel; the id is assigned by the backend.
    ///
    /// # Errors
    /// Any [`ApiError`]; the response body is not interpreted.
    pub async fn create_channel(&self, payload: &NewChannel) -> Result<(), ApiError> {
        let request = Request::post(&self.url(create_path()))
            .json(payload)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        self.send(request).await.map(|_| ())
    }

    /// Probe whether a destination chat is reachable by the posting bot.
    ///
    /// A body that is not a JSON boolean counts as unreachable rather than
    /// an error; the backend reports failures in-band here.
    ///
    /// # Errors
    /// Transport-level failures only.
    pub async fn check_chat(&self, chat_id: i64) -> Result<bool, ApiError> {
        let response = self.post_empty(&check_path(chat_id)).await?;
        Ok(response.json::<bool>().await.unwrap_or(false))
    }

    /// Update an existing channel in place.
    ///
    /// # Errors
    /// Any [`ApiError`]; the response body is not interpreted.
    pub async fn update_channel(&self, id: i64, payload: &NewChannel) -> Result<(), ApiError> {
        let request = Request::put(&self.url(&update_path(id)))
            .json(payload)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        self.send(request).await.map(|_| ())
    }

    /// Delete a channel; idempotent from the caller's perspective.
    ///
    /// # Errors
    /// Any [`ApiError`].
    pub async fn delete_channel(&self, id: i64) -> Result<(), ApiError> {
        self.send(Request::delete(&self.url(&delete_path(id))))
            .await
            .map(|_| ())
    }

    /// Activate or deactivate a channel via the distinct on/off endpoints.
    ///
    /// # Errors
    /// Any [`ApiError`].
    pub async fn set_active(&self, id: i64, active: bool) -> Result<(), ApiError> {
        self.post_empty(&active_path(id, active)).await.map(|_| ())
    }
}

/// Login probe: try the list endpoint with a candidate token.
///
/// Deliberately bypasses [`ApiClient::send`] — a rejected login must surface
/// as an error on the login screen, not trigger the eviction-and-redirect
/// policy meant for expired sessions.
///
/// # Errors
/// [`ApiError::Unauthorized`] for rejected credentials, [`ApiError::Status`]
/// for other non-success statuses, [`ApiError::Network`] when the backend is
/// unreachable.
pub async fn probe_credentials(base_url: &str, token: &str) -> Result<(), ApiError> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), list_path());
    let response = Request::get(&url)
        .header("Authorization", &authorization_value(token))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    if response.status() == 401 {
        return Err(ApiError::Unauthorized);
    }
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(())
}
