//! Parsers for the remote formats consumed by the TuneIn channel
//!
//! The TuneIn directory speaks three legacy text formats:
//!
//! - **Outline documents**: an OPML-style XML family carrying the category
//!   and station tree ([`opml`])
//! - **`.pls` playlists**: INI-style `File1..FileN` entries ([`pls`])
//! - **`.m3u`/`.m3u8` playlists**: one URL per line ([`m3u`])
//!
//! Everything here is pure parsing over `&str`; fetching and navigation
//! live in the `tunein-channel` crate.
//!
//! # Example
//!
//! ```
//! use tunein_formats::OutlineDocument;
//!
//! let doc = OutlineDocument::parse(
//!     r#"<opml><body><outline type="audio" text="Radio One" url="http://x/tune"/></body></opml>"#,
//! )?;
//! assert!(doc.body.outlines[0].is_audio());
//! # Ok::<(), tunein_formats::FormatError>(())
//! ```

pub mod error;
pub mod m3u;
pub mod opml;
pub mod pls;

// Re-exports
pub use error::{FormatError, Result};
pub use opml::{collapse_lone_stations, Body, Head, Outline, OutlineDocument};
