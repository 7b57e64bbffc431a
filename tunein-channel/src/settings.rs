//! Caller configuration record
//!
//! Navigation and resolution read nothing ambient: the host passes a
//! [`TuneInSettings`] record into every call. The record is cheap to clone
//! and safe to share across concurrent in-flight requests.

use serde::{Deserialize, Serialize};

/// Read-only caller configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TuneInSettings {
    /// TuneIn account username; enables the favorites listing
    #[serde(default)]
    pub username: Option<String>,

    /// Geolocation as `"lat,lon"`, forwarded to the directory for
    /// location-aware listings
    #[serde(default)]
    pub latlon: Option<String>,

    /// Installation serial forwarded with every directory request
    pub serial: String,
}

impl TuneInSettings {
    /// Create settings with just an installation serial
    pub fn new(serial: impl Into<String>) -> Self {
        Self {
            serial: serial.into(),
            ..Self::default()
        }
    }

    /// Whether a username is configured (and favorites are available)
    pub fn has_username(&self) -> bool {
        self.username.as_deref().is_some_and(|u| !u.trim().is_empty())
    }

    /// Cache partition key for host-side listing caches
    ///
    /// Listings depend on the configured geolocation and username, so both
    /// are folded into the key.
    pub fn cache_key(&self) -> String {
        format!(
            "{}-{}",
            self.latlon.as_deref().unwrap_or_default(),
            self.username.as_deref().unwrap_or_default()
        )
    }
}
