//! TuneIn directory navigation and stream resolution
//!
//! This crate treats the TuneIn outline directory as a navigable tree of
//! categories, stations, and shows, addressed by opaque location tokens
//! the caller round-trips between calls.
//!
//! # Features
//!
//! - **Tree Navigation**: list the children of any location — root
//!   categories, drill-down folders, and the account's favorites
//! - **Opaque Addressing**: every listing row carries a token that
//!   re-enters navigation at that exact point later
//! - **Stream Resolution**: dereference a station's indirection URL
//!   through `.pls`/`.m3u`/`.m3u8` playlist files down to directly
//!   playable endpoints
//! - **Injected Configuration**: caller identity (username, geolocation,
//!   installation serial) travels into each call as an explicit record
//!
//! # Example
//!
//! ```no_run
//! use tunein_channel::{ItemKind, TuneInClient, TuneInSettings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TuneInClient::new().await?;
//!     let settings = TuneInSettings::new("0123456789");
//!
//!     // Walk into the first folder of the root listing
//!     let root = client.list_children("", &settings).await?;
//!     let folder = root.iter().find(|i| i.is_folder()).expect("no folders");
//!     let children = client.list_children(&folder.id, &settings).await?;
//!
//!     // Resolve the first station into playable streams
//!     if let Some(station) = children.iter().find(|i| i.kind == ItemKind::Media) {
//!         for stream in client.resolve_media(&station.id).await? {
//!             println!("{} ({})", stream.url, stream.container);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Caching
//!
//! Nothing is cached here; repeated identical requests re-fetch and
//! re-parse. Hosts that cache listings should partition by
//! [`TuneInSettings::cache_key`] and invalidate whenever [`DATA_VERSION`]
//! changes.
//!
//! # Errors
//!
//! Navigation reports failures through typed [`Error`] variants rather
//! than masking them: an upstream "no stations or shows available" marker
//! surfaces as [`Error::EmptyResult`], undecodable tokens as
//! [`Error::MalformedToken`], and structurally broken documents as
//! [`Error::MalformedDocument`]. During stream resolution only the outer
//! fetch is fatal; failing playlist lines are skipped.

pub mod browse;
pub mod client;
pub mod error;
pub mod models;
pub mod resolve;
pub mod settings;
pub mod token;

// Re-exports
pub use browse::{FAVORITES_NAME, NO_RESULTS_SENTINEL};
pub use client::{
    ClientBuilder, TuneInClient, CHANNEL_DESCRIPTION, CHANNEL_NAME, DATA_VERSION,
    DEFAULT_BASE_URL, HOME_PAGE_URL, SUPPORTED_FORMATS,
};
pub use error::{Error, Result};
pub use models::{AudioContainer, ChannelItem, ItemKind, MediaStream};
pub use resolve::MAX_PLAYLIST_HOPS;
pub use settings::TuneInSettings;
pub use token::ItemId;
