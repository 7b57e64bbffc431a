//! Outline document model
//!
//! The TuneIn directory serves an OPML-style XML document family: a `body`
//! holding nested `outline` elements whose data lives entirely in
//! attributes (`text`, `url`, `type`, `image`, `key`). This module
//! deserializes those documents and provides the classification predicates
//! the navigator applies to a scope's immediate children.

use crate::error::{FormatError, Result};
use serde::Deserialize;

/// Display text of the wrapper folder that gets collapsed when it is the
/// only child of a scope.
pub const STATIONS_WRAPPER: &str = "Stations";

/// A parsed outline document
#[derive(Debug, Clone)]
pub struct OutlineDocument {
    /// Optional document head (title, status)
    pub head: Option<Head>,
    /// Document body holding the outline tree
    pub body: Body,
}

/// Raw deserialization target; `body` is validated in [`OutlineDocument::parse`]
#[derive(Debug, Deserialize)]
struct RawDocument {
    head: Option<Head>,
    body: Option<Body>,
}

/// Document head
#[derive(Debug, Clone, Deserialize)]
pub struct Head {
    /// Document title
    pub title: Option<String>,
    /// Upstream status code, served as text
    pub status: Option<String>,
}

/// Document body: the root scope of the outline tree
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Body {
    /// Direct children of the body
    #[serde(rename = "outline", default)]
    pub outlines: Vec<Outline>,
}

/// A single outline node
///
/// Attributes are inconsistently populated upstream, so every one of them
/// is optional. quick-xml decodes character entities on ingress, so a URL
/// escaped as `a&amp;b` in the markup arrives here as `a&b`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Outline {
    /// Display text
    #[serde(rename = "@text")]
    pub text: Option<String>,
    /// Target URL (stream URL for audio nodes, outline URL for links)
    #[serde(rename = "@url")]
    pub url: Option<String>,
    /// Node type: `audio`, `link`, or unset
    #[serde(rename = "@type")]
    pub kind: Option<String>,
    /// Image URL
    #[serde(rename = "@image")]
    pub image: Option<String>,
    /// Grouping key (e.g. `shows`, `related`)
    #[serde(rename = "@key")]
    pub key: Option<String>,
    /// Nested outlines
    #[serde(rename = "outline", default)]
    pub children: Vec<Outline>,
}

impl OutlineDocument {
    /// Parse an outline document from XML text
    ///
    /// A document without a `body` element is malformed.
    pub fn parse(input: &str) -> Result<Self> {
        let raw: RawDocument = quick_xml::de::from_str(input)?;
        Ok(Self {
            head: raw.head,
            body: raw.body.ok_or(FormatError::MissingBody)?,
        })
    }
}

impl Body {
    /// Find a direct child by display text
    pub fn find_outline(&self, text: &str) -> Option<&Outline> {
        self.outlines.iter().find(|o| o.text.as_deref() == Some(text))
    }

    /// Depth-first traversal over every outline in the document
    pub fn iter(&self) -> OutlineIter<'_> {
        OutlineIter {
            stack: self.outlines.iter().rev().collect(),
        }
    }
}

impl Outline {
    /// Media leaf: `type=audio` with a URL
    pub fn is_audio(&self) -> bool {
        self.kind.as_deref() == Some("audio") && self.url.is_some()
    }

    /// Folder-link: `type=link` with a URL
    pub fn is_link(&self) -> bool {
        self.kind.as_deref() == Some("link") && self.url.is_some()
    }

    /// Subcategory folder: has text, no URL, and is not a `related` group
    pub fn is_subcategory(&self) -> bool {
        self.text.is_some() && self.url.is_none() && self.key.as_deref() != Some("related")
    }

    /// Display text, or the empty string when unset
    pub fn display_text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

/// Collapse a lone `"Stations"` wrapper folder
///
/// When a scope's direct children are exactly one outline named
/// `"Stations"`, navigation descends into it transparently and classifies
/// its children instead.
pub fn collapse_lone_stations(outlines: &[Outline]) -> &[Outline] {
    match outlines {
        [only] if only.text.as_deref() == Some(STATIONS_WRAPPER) => &only.children,
        _ => outlines,
    }
}

/// Depth-first iterator over outlines, in document order
pub struct OutlineIter<'a> {
    stack: Vec<&'a Outline>,
}

impl<'a> Iterator for OutlineIter<'a> {
    type Item = &'a Outline;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        for child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}
