//! Caller-facing models
//!
//! [`ChannelItem`] is one listing row produced by navigation;
//! [`MediaStream`] is one resolved, directly playable endpoint. Both are
//! created fresh per request and never persisted by this crate.

use serde::{Deserialize, Serialize};

/// Fixed technical hint: audio bitrate in bits per second
pub const DEFAULT_BITRATE: u32 = 128_000;

/// Fixed technical hint: channel count
pub const DEFAULT_CHANNELS: u8 = 2;

/// Kind of a listing row
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ItemKind {
    /// A navigable folder; its `id` re-enters [`list_children`]
    ///
    /// [`list_children`]: crate::TuneInClient::list_children
    Folder,
    /// An audio media leaf; its `id` feeds [`resolve_media`]
    ///
    /// [`resolve_media`]: crate::TuneInClient::resolve_media
    Media,
}

/// One row of a channel listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChannelItem {
    /// Display name
    pub name: String,
    /// Opaque location token, round-tripped by the caller
    pub id: String,
    /// Folder or media leaf; media leaves are always audio podcasts
    pub kind: ItemKind,
    /// Image URL, when the outline carried one
    pub image: Option<String>,
}

impl ChannelItem {
    /// Create a folder row
    pub fn folder(name: impl Into<String>, id: impl Into<String>, image: Option<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            kind: ItemKind::Folder,
            image,
        }
    }

    /// Create a media-leaf row
    pub fn media(name: impl Into<String>, id: impl Into<String>, image: Option<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            kind: ItemKind::Media,
            image,
        }
    }

    /// Check if this row is a folder
    pub fn is_folder(&self) -> bool {
        self.kind == ItemKind::Folder
    }
}

/// Coarse audio container classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AudioContainer {
    /// AAC audio (the default when nothing else matches)
    Aac,
    /// MP3 audio
    Mp3,
}

impl AudioContainer {
    /// Container name as used in stream URLs and format lists
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aac => "aac",
            Self::Mp3 => "mp3",
        }
    }
}

impl std::fmt::Display for AudioContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved, directly playable endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaStream {
    /// Direct-play URL
    pub url: String,
    /// Coarse container classification
    pub container: AudioContainer,
    /// Audio bitrate hint, bits per second
    pub bitrate: u32,
    /// Channel count hint
    pub channels: u8,
    /// Whether the endpoint can be played without further processing
    pub direct_play: bool,
}

impl MediaStream {
    /// Create a direct-play stream with the fixed technical hints
    pub fn direct(url: impl Into<String>, container: AudioContainer) -> Self {
        Self {
            url: url.into(),
            container,
            bitrate: DEFAULT_BITRATE,
            channels: DEFAULT_CHANNELS,
            direct_play: true,
        }
    }
}
