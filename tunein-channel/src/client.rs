//! HTTP client for the TuneIn outline directory
//!
//! This module provides the client that navigation and resolution run on,
//! plus a builder for configuring it.
//!
//! # Example
//!
//! ```no_run
//! use tunein_channel::{TuneInClient, TuneInSettings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TuneInClient::new().await?;
//!     let settings = TuneInSettings::new("0123456789");
//!
//!     // List the root categories
//!     for item in client.list_children("", &settings).await? {
//!         println!("{} ({})", item.name, item.id);
//!     }
//!
//!     Ok(())
//! }
//! ```

use crate::error::{Error, Result};
use crate::settings::TuneInSettings;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Default TuneIn outline directory base URL
pub const DEFAULT_BASE_URL: &str = "https://opml.radiotime.com";

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent
pub const DEFAULT_USER_AGENT: &str = "tunein-rs/0.1 (tunein-channel)";

/// Audio formats requested from the directory
pub const SUPPORTED_FORMATS: &str = "mp3,aac";

/// Freshness tag for external listing caches
///
/// Not derived from content. Bump it whenever parsing or classification
/// rules change so callers invalidate whatever they cached.
pub const DATA_VERSION: &str = "1";

/// Caller-facing channel name
pub const CHANNEL_NAME: &str = "TuneIn";

/// Caller-facing channel description
pub const CHANNEL_DESCRIPTION: &str =
    "Listen to online radio, find streaming music radio and streaming talk radio with TuneIn.";

/// Caller-facing home page
pub const HOME_PAGE_URL: &str = "https://www.tunein.com/";

/// TuneIn directory HTTP client
///
/// The client is stateless: caller configuration travels into each call as
/// a [`TuneInSettings`] record, so one client can serve concurrent
/// requests for different callers. Nothing is cached internally; repeated
/// identical requests re-fetch and re-parse.
#[derive(Debug, Clone)]
pub struct TuneInClient {
    pub(crate) client: Client,
    base_url: String,
    timeout: Duration,
}

impl TuneInClient {
    /// Create a new client with default settings
    pub async fn new() -> Result<Self> {
        Self::builder().build().await
    }

    /// Create a builder for configuring the client
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client with a custom `reqwest::Client`
    ///
    /// Useful for sharing HTTP connection pools or custom proxy settings
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the internal HTTP client
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    // ========================================================================
    // Endpoint construction
    // ========================================================================

    /// Build the base browse endpoint URL for a caller
    pub(crate) fn browse_url(&self, settings: &TuneInSettings) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/Browse.ashx", self.base_url))?;
        url.query_pairs_mut()
            .append_pair("formats", SUPPORTED_FORMATS)
            .append_pair("serial", &settings.serial);

        if let Some(latlon) = &settings.latlon {
            url.query_pairs_mut().append_pair("latlon", latlon);
        }

        Ok(url)
    }

    /// Build the presets (favorites) endpoint URL for a caller
    pub(crate) fn presets_url(&self, settings: &TuneInSettings) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/Browse.ashx", self.base_url))?;
        url.query_pairs_mut()
            .append_pair("c", "presets")
            .append_pair("formats", SUPPORTED_FORMATS)
            .append_pair("serial", &settings.serial);

        if let Some(username) = &settings.username {
            url.query_pairs_mut().append_pair("username", username);
        }

        Ok(url)
    }

    // ========================================================================
    // Transport
    // ========================================================================

    /// Fetch a URL as text, failing on non-success status
    pub(crate) async fn fetch_text(&self, url: &str) -> Result<String> {
        tracing::debug!("Fetching {}", url);

        let response = self.client.get(url).timeout(self.timeout).send().await?;

        if !response.status().is_success() {
            return Err(Error::api_error(format!(
                "{} returned status {}",
                url,
                response.status()
            )));
        }

        Ok(response.text().await?)
    }
}

/// Builder for configuring a [`TuneInClient`]
#[derive(Debug)]
pub struct ClientBuilder {
    client: Option<Client>,
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            client: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom HTTP client
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the base URL (test servers, regional mirrors)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client
    pub async fn build(self) -> Result<TuneInClient> {
        let client = match self.client {
            Some(client) => client,
            None => Client::builder()
                .user_agent(&self.user_agent)
                .timeout(self.timeout)
                .build()?,
        };

        Ok(TuneInClient {
            client,
            base_url: self.base_url,
            timeout: self.timeout,
        })
    }
}
