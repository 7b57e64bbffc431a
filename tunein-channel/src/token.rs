//! Identifier codec
//!
//! Every navigable location is addressed by a single opaque string token
//! that the caller persists between calls. The token grammar is a tag
//! prefix followed by the payload:
//!
//! - `""` — root listing
//! - `preset_` — the caller's favorites
//! - `category_<url>` — a folder fetched from `<url>`
//! - `subcat_<url> <anchor>` — a folder fetched from `<url>`, scoped to the
//!   named anchor; the two fields are separated by a single ASCII space,
//!   which cannot occur inside a valid URL, so splitting on the first
//!   space is unambiguous even when the anchor text contains spaces
//! - `stream_<url>` — a media leaf to resolve
//!
//! Tokens must round-trip: `decode(encode(id)) == id` for every
//! constructible [`ItemId`]. Hosts may hand back attribute text stored
//! verbatim from the markup, so `decode` unescapes `&amp;` in URL fields.

use crate::error::{Error, Result};

const PRESET_TAG: &str = "preset_";
const SUBCATEGORY_TAG: &str = "subcat_";
const CATEGORY_TAG: &str = "category_";
const STREAM_TAG: &str = "stream_";

/// A decoded navigable location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemId {
    /// Root of the category tree
    Root,
    /// The caller's favorites listing
    Presets,
    /// A folder whose children are fetched from `url`
    Category {
        /// Outline document URL
        url: String,
    },
    /// A folder whose children are fetched from `url`, scoped to the child
    /// outline whose display text matches `anchor`
    Subcategory {
        /// Outline document URL; `None` means the base browse endpoint
        url: Option<String>,
        /// Display text of the anchor outline
        anchor: String,
    },
    /// A media leaf; `url` is the indirection/media URL to resolve
    Stream {
        /// Stream or playlist URL
        url: String,
    },
}

impl ItemId {
    /// Encode this location as an opaque token
    pub fn encode(&self) -> String {
        match self {
            Self::Root => String::new(),
            Self::Presets => PRESET_TAG.to_string(),
            Self::Category { url } => format!("{CATEGORY_TAG}{url}"),
            Self::Subcategory { url, anchor } => {
                format!("{SUBCATEGORY_TAG}{} {anchor}", url.as_deref().unwrap_or(""))
            }
            Self::Stream { url } => format!("{STREAM_TAG}{url}"),
        }
    }

    /// Decode a token received back from the caller
    pub fn decode(token: &str) -> Result<Self> {
        if token.is_empty() {
            return Ok(Self::Root);
        }

        if token.strip_prefix(PRESET_TAG).is_some() {
            return Ok(Self::Presets);
        }

        if let Some(payload) = token.strip_prefix(SUBCATEGORY_TAG) {
            let (url, anchor) = payload
                .split_once(' ')
                .ok_or_else(|| Error::malformed_token(token))?;
            let url = (!url.is_empty()).then(|| unescape_amp(url));
            return Ok(Self::Subcategory {
                url,
                anchor: anchor.to_string(),
            });
        }

        if let Some(url) = token.strip_prefix(CATEGORY_TAG) {
            return Ok(Self::Category {
                url: unescape_amp(url),
            });
        }

        if let Some(url) = token.strip_prefix(STREAM_TAG) {
            return Ok(Self::Stream {
                url: unescape_amp(url),
            });
        }

        Err(Error::malformed_token(token))
    }
}

/// Undo HTML attribute escaping of `&` left in place by upstream callers
fn unescape_amp(s: &str) -> String {
    s.replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(id: ItemId) {
        assert_eq!(ItemId::decode(&id.encode()).unwrap(), id);
    }

    #[test]
    fn test_round_trip_all_variants() {
        round_trip(ItemId::Root);
        round_trip(ItemId::Presets);
        round_trip(ItemId::Category {
            url: "http://opml.example/Browse.ashx?id=c1".to_string(),
        });
        round_trip(ItemId::Subcategory {
            url: Some("http://opml.example/Browse.ashx?id=c1".to_string()),
            anchor: "Most Popular".to_string(),
        });
        round_trip(ItemId::Subcategory {
            url: None,
            anchor: "Local Radio".to_string(),
        });
        round_trip(ItemId::Stream {
            url: "http://opml.example/Tune.ashx?id=s1".to_string(),
        });
    }

    #[test]
    fn test_anchor_may_contain_spaces_and_underscores() {
        round_trip(ItemId::Subcategory {
            url: Some("http://x/b?id=a_b_c".to_string()),
            anchor: "News & Talk_extra words".to_string(),
        });
    }

    #[test]
    fn test_url_with_ampersand_round_trips() {
        // A URL that reached the host escaped as &amp; must decode to a
        // literal & ready for re-embedding in an outgoing request.
        let id = ItemId::decode("stream_http://x/t?a=1&amp;b=2").unwrap();
        assert_eq!(
            id,
            ItemId::Stream {
                url: "http://x/t?a=1&b=2".to_string()
            }
        );
    }

    #[test]
    fn test_empty_token_is_root() {
        assert_eq!(ItemId::decode("").unwrap(), ItemId::Root);
    }

    #[test]
    fn test_unknown_prefix_is_malformed() {
        assert!(matches!(
            ItemId::decode("bogus_http://x"),
            Err(Error::MalformedToken(_))
        ));
    }

    #[test]
    fn test_subcategory_without_separator_is_malformed() {
        assert!(matches!(
            ItemId::decode("subcat_http://x/no-anchor"),
            Err(Error::MalformedToken(_))
        ));
    }
}
