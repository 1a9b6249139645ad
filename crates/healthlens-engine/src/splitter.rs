//! Partition a dump into ordered sections.
//!
//! Two strategies share the [`Splitter`] trait and are picked once per
//! pipeline from the declared [`Dialect`].

use healthlens_types::{Dialect, RawSection};

use crate::patterns::{BANNER_REGEX, NODE_TOKEN_REGEX};

/// Identifier given to text preceding the first node token.
pub const PREAMBLE_IDENTIFIER: &str = "Unknown";

pub trait Splitter {
    fn split(&self, text: &str) -> Vec<RawSection>;
}

/// Banner-delimited dumps: one section per `# TITLE #` banner.
///
/// Text before the first banner is discarded. The identifier is the
/// trimmed, lowercased title and the body is everything up to the next
/// banner, trimmed.
#[derive(Debug, Clone, Copy, Default)]
pub struct BannerSplitter;

impl Splitter for BannerSplitter {
    fn split(&self, text: &str) -> Vec<RawSection> {
        // (banner start, banner end, title)
        let banners: Vec<(usize, usize, &str)> = BANNER_REGEX
            .captures_iter(text)
            .filter_map(|caps| {
                let banner = caps.get(0)?;
                let title = caps.get(1).map_or("", |m| m.as_str());
                Some((banner.start(), banner.end(), title))
            })
            .collect();

        banners
            .iter()
            .enumerate()
            .map(|(order, &(_, body_start, title))| {
                let body_end = banners
                    .get(order + 1)
                    .map(|&(next_start, _, _)| next_start)
                    .unwrap_or(text.len());

                RawSection::new(
                    title.trim().to_lowercase(),
                    text[body_start..body_end].trim(),
                    order,
                )
            })
            .collect()
    }
}

/// Cluster dumps: a block starts right before every node/IP token.
///
/// The token becomes the block identifier. Blocks are an approximation: a
/// token repeated in free text (a log line mentioning `node2`) opens a new
/// block there, so evidence is attributed to whichever token precedes it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeBoundarySplitter;

impl Splitter for NodeBoundarySplitter {
    fn split(&self, text: &str) -> Vec<RawSection> {
        let anchors: Vec<_> = NODE_TOKEN_REGEX.find_iter(text).collect();
        let mut sections = Vec::with_capacity(anchors.len() + 1);

        let preamble_end = anchors.first().map(|m| m.start()).unwrap_or(text.len());
        if !text[..preamble_end].trim().is_empty() {
            sections.push(RawSection::new(PREAMBLE_IDENTIFIER, &text[..preamble_end], 0));
        }

        for (i, anchor) in anchors.iter().enumerate() {
            let end = anchors
                .get(i + 1)
                .map(|next| next.start())
                .unwrap_or(text.len());
            let order = sections.len();
            sections.push(RawSection::new(anchor.as_str(), &text[anchor.start()..end], order));
        }

        sections
    }
}

pub fn splitter_for(dialect: Dialect) -> Box<dyn Splitter> {
    match dialect {
        Dialect::Banner => Box::new(BannerSplitter),
        Dialect::NodeBoundary => Box::new(NodeBoundarySplitter),
    }
}

/// Content probe used when no dialect is declared: any banner means the
/// banner dialect, otherwise the dump is treated as a cluster dump.
pub fn detect_dialect(text: &str) -> Dialect {
    if BANNER_REGEX.is_match(text) {
        Dialect::Banner
    } else {
        Dialect::NodeBoundary
    }
}
