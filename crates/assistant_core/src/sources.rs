use std::collections::HashSet;

use assistant_logging::assistant_debug;
use url::Url;

use crate::SourceChunk;

/// Marker that precedes the page path inside a backend source identifier.
pub const SOURCE_MARKER: &str = "penn_";
/// Extension that terminates the page path.
pub const SOURCE_EXTENSION: &str = ".txt";
/// Public site the scraped pages came from.
pub const DEFAULT_SOURCE_BASE_URL: &str = "https://www.pennnationalinsurance.com/";

/// How a backend source identifier such as `docs/penn_auto_policy.txt` maps
/// onto a public page URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceMapping {
    marker: String,
    extension: String,
    base_url: String,
}

impl Default for SourceMapping {
    fn default() -> Self {
        Self::new(SOURCE_MARKER, SOURCE_EXTENSION, DEFAULT_SOURCE_BASE_URL)
    }
}

impl SourceMapping {
    pub fn new(
        marker: impl Into<String>,
        extension: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            marker: marker.into(),
            extension: extension.into(),
            base_url: base_url.into(),
        }
    }

    /// Maps one source identifier to its page URL.
    ///
    /// The path is the text between the first marker and the extension, with
    /// every `_` turned into `/`. A second marker ends the path early. Returns
    /// `None` when the source contains no marker or no extension (anywhere, so
    /// an extension before the marker still counts), or when the result is not
    /// a valid URL.
    pub fn resolve(&self, source: &str) -> Option<String> {
        if !source.contains(self.extension.as_str()) {
            return None;
        }
        let (_, after_marker) = source.split_once(self.marker.as_str())?;
        let segment = after_marker
            .split(self.marker.as_str())
            .next()
            .unwrap_or(after_marker);
        let stem = segment
            .split(self.extension.as_str())
            .next()
            .unwrap_or(segment);
        let composed = format!("{}{}", self.base_url, stem.replace('_', "/"));
        Url::parse(&composed).ok().map(String::from)
    }
}

/// Counts from one [`SourceResolver::resolve`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolveSummary {
    pub added: usize,
    pub duplicates: usize,
    pub unmapped: usize,
}

/// Accumulates source URLs in order of first appearance until cleared.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceResolver {
    mapping: SourceMapping,
    visited: Vec<String>,
    seen: HashSet<String>,
}

impl SourceResolver {
    pub fn new(mapping: SourceMapping) -> Self {
        Self {
            mapping,
            ..Self::default()
        }
    }

    pub fn resolve(&mut self, chunks: &[SourceChunk]) -> ResolveSummary {
        let mut summary = ResolveSummary::default();
        for chunk in chunks {
            let Some(url) = self.mapping.resolve(&chunk.source) else {
                assistant_debug!("Skipping unmapped source {:?}", chunk.source);
                summary.unmapped += 1;
                continue;
            };
            if self.seen.insert(url.clone()) {
                self.visited.push(url);
                summary.added += 1;
            } else {
                summary.duplicates += 1;
            }
        }
        summary
    }

    pub fn urls(&self) -> &[String] {
        &self.visited
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    pub fn clear(&mut self) {
        self.visited.clear();
        self.seen.clear();
    }
}
