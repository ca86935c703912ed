use std::collections::HashSet;

use tracing::{debug, info};

use crate::{
    error::ExtractError,
    fetch::{DocumentFetcher, HttpFetcher},
    models::{ExtractedPage, ParsedDocument, TextNode, DOCUMENT_ROOT},
    parse::{HtmlParser, ScraperParser, DEFAULT_BACKEND},
};

/// Tags whose direct text children never reach the output.
pub const BASELINE_EXCLUDED_TAGS: [&str; 6] =
    [DOCUMENT_ROOT, "head", "meta", "script", "style", "title"];

/// Fetches a page and reduces it to its human-visible text.
///
/// The excluded tag set is fixed at construction. Every extraction call
/// fetches and parses the document again. Extraction is async; callers need
/// a tokio runtime (or must `block_on` the returned future).
pub struct TextExtractor<F = HttpFetcher, P = ScraperParser> {
    source_url: String,
    excluded_tags: HashSet<String>,
    skip_blank_fragments: bool,
    fetcher: F,
    parser: P,
}

impl TextExtractor {
    pub fn new<I, S>(source_url: impl Into<String>, extra_excluded_tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let excluded_tags = BASELINE_EXCLUDED_TAGS
            .iter()
            .map(|tag| tag.to_string())
            .chain(
                extra_excluded_tags
                    .into_iter()
                    .map(|tag| tag.as_ref().trim().to_ascii_lowercase()),
            )
            .collect();

        Self {
            source_url: source_url.into(),
            excluded_tags,
            skip_blank_fragments: false,
            fetcher: HttpFetcher::new(),
            parser: ScraperParser::new(),
        }
    }

    pub fn from_url(source_url: impl Into<String>) -> Self {
        Self::new(source_url, std::iter::empty::<&str>())
    }
}

impl<F, P> TextExtractor<F, P> {
    pub fn with_fetcher<G: DocumentFetcher>(self, fetcher: G) -> TextExtractor<G, P> {
        TextExtractor {
            source_url: self.source_url,
            excluded_tags: self.excluded_tags,
            skip_blank_fragments: self.skip_blank_fragments,
            fetcher,
            parser: self.parser,
        }
    }

    pub fn with_parser<Q: HtmlParser>(self, parser: Q) -> TextExtractor<F, Q> {
        TextExtractor {
            source_url: self.source_url,
            excluded_tags: self.excluded_tags,
            skip_blank_fragments: self.skip_blank_fragments,
            fetcher: self.fetcher,
            parser,
        }
    }

    /// Drops visible fragments that are empty after trimming, so separators
    /// never pile up between blocks. Off by default.
    pub fn skipping_blank_fragments(mut self) -> Self {
        self.skip_blank_fragments = true;
        self
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn excluded_tags(&self) -> &HashSet<String> {
        &self.excluded_tags
    }

    /// Comments are never visible. Text is hidden only when its *immediate*
    /// parent is excluded; deeper ancestors are not consulted.
    pub fn is_text_visible(&self, node: &TextNode) -> bool {
        if node.is_comment() {
            return false;
        }
        !self
            .excluded_tags
            .contains(&node.parent_tag.to_ascii_lowercase())
    }

    pub fn visible_fragments<'a>(
        &'a self,
        document: &'a ParsedDocument,
    ) -> impl Iterator<Item = &'a str> + 'a {
        document
            .text_nodes()
            .filter(move |node| self.is_text_visible(node))
            .map(|node| node.content.trim())
            .filter(move |fragment| !(self.skip_blank_fragments && fragment.is_empty()))
    }

    /// Trims each visible fragment and joins them with single spaces. Blank
    /// fragments still contribute a separator unless they are skipped.
    pub fn join_visible(&self, document: &ParsedDocument) -> String {
        self.visible_fragments(document).collect::<Vec<_>>().join(" ")
    }
}

impl<F: DocumentFetcher, P: HtmlParser> TextExtractor<F, P> {
    pub async fn extract_text(
        &self,
        url_override: Option<&str>,
        backend: Option<&str>,
    ) -> Result<String, ExtractError> {
        Ok(self.extract_page(url_override, backend).await?.text)
    }

    pub async fn extract_page(
        &self,
        url_override: Option<&str>,
        backend: Option<&str>,
    ) -> Result<ExtractedPage, ExtractError> {
        let url = url_override.unwrap_or(&self.source_url);
        let backend = backend.unwrap_or(DEFAULT_BACKEND);

        let bytes = self
            .fetcher
            .fetch(url)
            .await
            .map_err(|source| ExtractError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let document = self
            .parser
            .parse(&bytes, backend)
            .map_err(|source| ExtractError::Parse {
                url: url.to_string(),
                backend: backend.to_string(),
                source,
            })?;

        let fragments = self.visible_fragments(&document).collect::<Vec<_>>();
        debug!(
            "{} of {} text nodes visible in {}",
            fragments.len(),
            document.len(),
            url
        );

        let page = ExtractedPage {
            url: url.to_string(),
            backend: backend.to_string(),
            fragments: fragments.len(),
            text: fragments.join(" "),
        };
        info!("Extracted {} chars of text from {}", page.text.chars().count(), url);

        Ok(page)
    }
}
