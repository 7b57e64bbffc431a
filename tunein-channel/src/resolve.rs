//! Stream resolution
//!
//! A selected media leaf carries an indirection URL: fetching it yields
//! one line per offer (multi-bitrate offers yield several), where each
//! line is either a direct stream URL or a playlist file that must be
//! dereferenced further. Resolution is uniformly recursive with a hop
//! budget, and per-line failures are skipped so one dead playlist does
//! not take down the remaining offers.

use crate::client::TuneInClient;
use crate::error::{Error, Result};
use crate::models::{AudioContainer, MediaStream};
use crate::token::ItemId;
use tunein_formats::{m3u, pls};

/// Maximum playlist dereferences per line before the chain is dropped
pub const MAX_PLAYLIST_HOPS: usize = 3;

/// What a resolved URL points at, judged by its path extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    /// `.pls` playlist, to be fetched and sub-parsed
    Pls,
    /// `.m3u`/`.m3u8` playlist, to be fetched and sub-parsed
    M3u,
    /// Anything else: a final media URL
    Direct,
}

impl TuneInClient {
    /// Resolve a media-leaf token into directly playable endpoints
    ///
    /// Only the outer fetch aborts the operation; playlist lines that fail
    /// to fetch or parse are logged and skipped, and the remaining lines
    /// still resolve. The result order follows the document's line order
    /// with playlist entries expanded depth-first in place.
    pub async fn resolve_media(&self, token: &str) -> Result<Vec<MediaStream>> {
        let url = match ItemId::decode(token)? {
            ItemId::Stream { url } => url,
            _ => return Err(Error::malformed_token(token)),
        };

        tracing::debug!("Resolving media for {}", url);
        let outer = self.fetch_text(&url).await?;

        let mut streams = Vec::new();
        for line in outer.lines().map(str::trim).filter(|l| !l.is_empty()) {
            self.resolve_line(line, &mut streams).await;
        }

        Ok(streams)
    }

    /// Resolve one line of the outer document, following playlist
    /// indirection until a direct URL or the hop budget is reached
    async fn resolve_line(&self, line: &str, out: &mut Vec<MediaStream>) {
        let mut pending: Vec<(String, usize)> = vec![(line.to_string(), MAX_PLAYLIST_HOPS)];

        while let Some((url, hops)) = pending.pop() {
            let kind = classify_line(&url);

            if kind == LineKind::Direct {
                out.push(MediaStream::direct(&url, sniff_container(&url)));
                continue;
            }

            if hops == 0 {
                tracing::warn!(
                    "Playlist chain exceeded {} hops, skipping {}",
                    MAX_PLAYLIST_HOPS,
                    url
                );
                continue;
            }

            let entries = match self.fetch_text(&url).await {
                Ok(text) => match kind {
                    LineKind::Pls => pls::playlist_entries(&text),
                    _ => m3u::entries(&text),
                },
                Err(err) => {
                    tracing::warn!("Skipping playlist {}: {}", url, err);
                    continue;
                }
            };

            // reversed so the stack pops entries in document order
            for entry in entries.into_iter().rev() {
                pending.push((entry, hops - 1));
            }
        }
    }
}

/// Classify a URL by the extension of its path portion
fn classify_line(url: &str) -> LineKind {
    match file_extension(url) {
        Some(ext) if ext.eq_ignore_ascii_case("pls") => LineKind::Pls,
        Some(ext) if ext.eq_ignore_ascii_case("m3u") || ext.eq_ignore_ascii_case("m3u8") => {
            LineKind::M3u
        }
        _ => LineKind::Direct,
    }
}

/// Extension of the last path segment, with the query string ignored
fn file_extension(url: &str) -> Option<&str> {
    let path = url.split('?').next().unwrap_or(url);
    let segment = path.rsplit('/').next().unwrap_or(path);
    let (_, ext) = segment.rsplit_once('.')?;
    (!ext.is_empty()).then_some(ext)
}

/// Coarse container classification for a final media URL
///
/// Extension first, then the `aac`/`mp3` substrings in the last non-empty
/// path segment, then in the full URL; `aac` when nothing matches.
fn sniff_container(url: &str) -> AudioContainer {
    let lower = url.to_ascii_lowercase();

    match file_extension(&lower) {
        Some("aac") => return AudioContainer::Aac,
        Some("mp3") => return AudioContainer::Mp3,
        _ => {}
    }

    let path = lower.split('?').next().unwrap_or(&lower);
    let segment = path
        .split('/')
        .rev()
        .find(|s| !s.is_empty())
        .unwrap_or_default();

    for candidate in [segment, lower.as_str()] {
        if candidate.contains("aac") {
            return AudioContainer::Aac;
        }
        if candidate.contains("mp3") {
            return AudioContainer::Mp3;
        }
    }

    AudioContainer::Aac
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_line() {
        assert_eq!(classify_line("http://x/stream.pls"), LineKind::Pls);
        assert_eq!(classify_line("http://x/stream.PLS?a=1"), LineKind::Pls);
        assert_eq!(classify_line("http://x/stream.m3u"), LineKind::M3u);
        assert_eq!(classify_line("http://x/stream.m3u8?token=t"), LineKind::M3u);
        assert_eq!(classify_line("http://x/stream.mp3"), LineKind::Direct);
        assert_eq!(classify_line("http://x/stream"), LineKind::Direct);
    }

    #[test]
    fn test_file_extension_ignores_query() {
        assert_eq!(file_extension("http://x/a/b.pls?c=d.m3u"), Some("pls"));
        assert_eq!(file_extension("http://x/a/b?c=d.m3u"), None);
        assert_eq!(file_extension("http://x/a/b."), None);
    }

    #[test]
    fn test_sniff_by_extension() {
        assert_eq!(sniff_container("http://x/a.aac"), AudioContainer::Aac);
        assert_eq!(sniff_container("http://x/a.MP3?b=c"), AudioContainer::Mp3);
    }

    #[test]
    fn test_sniff_by_path_segment() {
        assert_eq!(
            sniff_container("http://x/streams/listen-mp3"),
            AudioContainer::Mp3
        );
        // trailing slash: last non-empty segment is inspected
        assert_eq!(
            sniff_container("http://x/station-aac/"),
            AudioContainer::Aac
        );
    }

    #[test]
    fn test_sniff_by_full_url() {
        assert_eq!(
            sniff_container("http://mp3.example/stations/listen"),
            AudioContainer::Mp3
        );
        // marker earlier in the path, not in the last segment
        assert_eq!(
            sniff_container("http://x/streams/mp3-high/listen"),
            AudioContainer::Mp3
        );
    }

    #[test]
    fn test_sniff_defaults_to_aac() {
        assert_eq!(sniff_container("http://x/listen"), AudioContainer::Aac);
        assert_eq!(sniff_container("http://x/listen?id=1"), AudioContainer::Aac);
    }
}
