//! Tree navigation
//!
//! Turns a location token into a typed listing of child entries. The
//! directory is stateless per request, so every emitted folder token
//! embeds enough information (parent URL, anchor text) to re-enter
//! navigation at that point later.

use crate::client::TuneInClient;
use crate::error::{Error, Result};
use crate::models::ChannelItem;
use crate::settings::TuneInSettings;
use crate::token::ItemId;
use tunein_formats::{collapse_lone_stations, Outline, OutlineDocument};

/// Display text upstream uses to report an empty location
pub const NO_RESULTS_SENTINEL: &str = "No stations or shows available";

/// Name of the synthetic favorites folder appended to the root listing
pub const FAVORITES_NAME: &str = "My Favorites";

/// Grouping key of the shows node in a presets document
const SHOWS_KEY: &str = "shows";

impl TuneInClient {
    /// List the children of a location
    ///
    /// `token` is a location token previously emitted by this method, or
    /// the empty string for the root listing. Returns [`Error::EmptyResult`]
    /// when upstream explicitly reports nothing available, so callers can
    /// tell "truly nothing here" from a successful empty list.
    pub async fn list_children(
        &self,
        token: &str,
        settings: &TuneInSettings,
    ) -> Result<Vec<ChannelItem>> {
        tracing::debug!("Listing children for token {:?}", token);

        match ItemId::decode(token)? {
            ItemId::Root => self.list_root(settings).await,
            ItemId::Presets => self.list_presets(settings).await,
            ItemId::Category { url } => self.list_menu(Some(&url), None, settings).await,
            ItemId::Subcategory { url, anchor } => {
                self.list_menu(url.as_deref(), Some(&anchor), settings).await
            }
            // Stream tokens address media leaves, not folders
            ItemId::Stream { .. } => Err(Error::malformed_token(token)),
        }
    }

    /// Root listing: base categories plus the synthetic favorites folder
    async fn list_root(&self, settings: &TuneInSettings) -> Result<Vec<ChannelItem>> {
        let mut items = self.list_menu(None, None, settings).await?;

        if settings.has_username() {
            items.push(ChannelItem::folder(
                FAVORITES_NAME,
                ItemId::Presets.encode(),
                None,
            ));
        }

        Ok(items)
    }

    /// Favorites listing
    ///
    /// Two passes over disjoint node sets of the same document: audio
    /// leaves anywhere become media items, and the URL-carrying children
    /// of any `shows` group become folders.
    async fn list_presets(&self, settings: &TuneInSettings) -> Result<Vec<ChannelItem>> {
        if !settings.has_username() {
            return Err(Error::MissingUsername);
        }

        let url = self.presets_url(settings)?;
        let text = self.fetch_text(url.as_str()).await?;
        let doc = OutlineDocument::parse(&text)?;

        let mut items = Vec::new();

        for node in doc.body.iter().filter(|o| o.is_audio()) {
            if let Some(stream_url) = &node.url {
                items.push(ChannelItem::media(
                    node.display_text(),
                    ItemId::Stream {
                        url: stream_url.clone(),
                    }
                    .encode(),
                    node.image.clone(),
                ));
            }
        }

        for group in doc.body.iter().filter(|o| o.key.as_deref() == Some(SHOWS_KEY)) {
            for node in &group.children {
                if let Some(show_url) = &node.url {
                    items.push(ChannelItem::folder(
                        node.display_text(),
                        ItemId::Category {
                            url: show_url.clone(),
                        }
                        .encode(),
                        node.image.clone(),
                    ));
                }
            }
        }

        Ok(items)
    }

    /// Fetch an outline document and classify one scope of it
    ///
    /// `url` is the outline document to fetch, or `None` for the base
    /// browse endpoint. With an `anchor`, the scope is restricted to the
    /// matching direct child of the body; an anchor that matches nothing
    /// keeps the document scope.
    async fn list_menu(
        &self,
        url: Option<&str>,
        anchor: Option<&str>,
        settings: &TuneInSettings,
    ) -> Result<Vec<ChannelItem>> {
        let fetch_url = match url {
            Some(u) => u.to_string(),
            None => self.browse_url(settings)?.to_string(),
        };

        let text = self.fetch_text(&fetch_url).await?;
        let doc = OutlineDocument::parse(&text)?;

        let scope: &[Outline] = match anchor.and_then(|a| doc.body.find_outline(a)) {
            Some(node) => &node.children,
            None => &doc.body.outlines,
        };
        let scope = collapse_lone_stations(scope);

        classify(scope, url)
    }
}

/// Classify a scope's immediate children into listing rows
///
/// Emission order is fixed: subcategory folders, media leaves, link
/// folders. `parent_url` is embedded into subcategory tokens so the
/// location can be re-entered later (`None` means the scope came from the
/// base browse endpoint, whose URL depends on caller settings and is
/// rebuilt at decode time).
fn classify(scope: &[Outline], parent_url: Option<&str>) -> Result<Vec<ChannelItem>> {
    if scope
        .iter()
        .any(|node| node.display_text() == NO_RESULTS_SENTINEL)
    {
        return Err(Error::EmptyResult);
    }

    let mut items = Vec::new();

    for node in scope.iter().filter(|o| o.is_subcategory()) {
        items.push(ChannelItem::folder(
            node.display_text(),
            ItemId::Subcategory {
                url: parent_url.map(str::to_string),
                anchor: node.display_text().to_string(),
            }
            .encode(),
            node.image.clone(),
        ));
    }

    for node in scope.iter().filter(|o| o.is_audio()) {
        if let Some(url) = &node.url {
            items.push(ChannelItem::media(
                node.display_text(),
                ItemId::Stream { url: url.clone() }.encode(),
                node.image.clone(),
            ));
        }
    }

    for node in scope.iter().filter(|o| o.is_link()) {
        if let Some(url) = &node.url {
            items.push(ChannelItem::folder(
                node.display_text(),
                ItemId::Category { url: url.clone() }.encode(),
                node.image.clone(),
            ));
        }
    }

    Ok(items)
}
