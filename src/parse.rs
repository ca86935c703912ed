use scraper::Html;
use tracing::debug;

use crate::{
    error::ParseError,
    html::{collect_text_nodes, decode},
    models::ParsedDocument,
};

pub const DEFAULT_BACKEND: &str = "html";

/// Turns raw document bytes into text nodes. The backend name is chosen by
/// the caller and interpreted only by the implementation.
pub trait HtmlParser: Send + Sync {
    fn parse(&self, bytes: &[u8], backend: &str) -> Result<ParsedDocument, ParseError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Backend {
    Lenient,
    Strict,
    Fragment,
}

impl Backend {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "html" | "html.parser" => Some(Backend::Lenient),
            "html-strict" => Some(Backend::Strict),
            "fragment" => Some(Backend::Fragment),
            _ => None,
        }
    }
}

/// html5ever-backed parser, via `scraper`.
///
/// Backends:
/// - `html` / `html.parser`: lenient document parse
/// - `html-strict`: rejects undecodable bytes and markup errors
/// - `fragment`: lenient fragment parse without implied `html`/`head`/`body`
#[derive(Debug, Default, Clone, Copy)]
pub struct ScraperParser;

impl ScraperParser {
    pub fn new() -> Self {
        Self
    }
}

impl HtmlParser for ScraperParser {
    fn parse(&self, bytes: &[u8], backend: &str) -> Result<ParsedDocument, ParseError> {
        let backend_kind = Backend::from_name(backend)
            .ok_or_else(|| ParseError::UnsupportedBackend(backend.to_string()))?;

        let decoded = decode(bytes);
        debug!(
            "Decoded {} bytes as {}{}",
            bytes.len(),
            decoded.encoding.name(),
            if decoded.had_errors { " (lossy)" } else { "" }
        );

        if backend_kind == Backend::Strict && decoded.had_errors {
            return Err(ParseError::Decode(decoded.encoding.name()));
        }

        let html = match backend_kind {
            Backend::Fragment => Html::parse_fragment(&decoded.text),
            Backend::Lenient | Backend::Strict => Html::parse_document(&decoded.text),
        };

        if backend_kind == Backend::Strict && !html.errors.is_empty() {
            return Err(ParseError::Malformed(
                html.errors.iter().map(|e| e.to_string()).collect(),
            ));
        }

        let document = ParsedDocument::from(collect_text_nodes(&html));
        debug!("Parsed {} text nodes with `{}`", document.len(), backend);

        Ok(document)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::models::{TextNode, DOCUMENT_ROOT};

    #[test]
    fn unknown_backend_is_rejected() {
        // Arrange
        let parser = ScraperParser::new();

        // Act
        let result = parser.parse(b"<p>Hello</p>", "lxml");

        // Assert
        assert!(matches!(result, Err(ParseError::UnsupportedBackend(name)) if name == "lxml"));
    }

    #[test]
    fn lenient_backend_accepts_broken_bytes() {
        // Arrange
        let parser = ScraperParser::new();

        // Act
        let result = parser.parse(&[b'<', b'p', b'>', 0xFF, b'<', b'/', b'p', b'>'], "html");

        // Assert
        assert_eq!(result.is_ok(), true);
    }

    #[test]
    fn strict_backend_rejects_undecodable_bytes() {
        // Arrange
        let parser = ScraperParser::new();

        // Act
        let result = parser.parse(&[b'<', b'p', b'>', 0xFF, b'<', b'/', b'p', b'>'], "html-strict");

        // Assert
        assert!(matches!(result, Err(ParseError::Decode("UTF-8"))));
    }

    #[test]
    fn strict_backend_rejects_markup_errors() {
        // Arrange
        let parser = ScraperParser::new();

        // Act
        let result = parser.parse(b"<p>Hi</p>", "html-strict");

        // Assert
        assert!(matches!(result, Err(ParseError::Malformed(errors)) if !errors.is_empty()));
    }

    #[test]
    fn strict_backend_accepts_well_formed_document() {
        // Arrange
        let parser = ScraperParser::new();
        let page = b"<!DOCTYPE html><html><head><title>Example</title></head><body><p>Hi</p></body></html>";

        // Act
        let document = parser.parse(page, "html-strict").unwrap();

        // Assert
        assert_eq!(
            document.nodes,
            vec![TextNode::text("title", "Example"), TextNode::text("p", "Hi")]
        );
    }

    #[test]
    fn html_parser_is_an_alias_of_html() {
        // Arrange
        let parser = ScraperParser::new();

        // Act
        let lenient = parser.parse(b"<p>Hello</p>", "html").unwrap();
        let alias = parser.parse(b"<p>Hello</p>", "html.parser").unwrap();

        // Assert
        assert_eq!(lenient, alias);
    }

    #[test]
    fn fragment_backend_reads_text_in_document_order() {
        // Arrange
        let parser = ScraperParser::new();

        // Act
        let document = parser.parse(b"<div>Dropped</div><p>Kept</p>", "fragment").unwrap();

        // Assert
        assert_eq!(
            document.nodes,
            vec![TextNode::text("div", "Dropped"), TextNode::text("p", "Kept")]
        );
    }

    #[test]
    fn fragment_backend_reports_top_level_text_under_document_root() {
        // Arrange
        let parser = ScraperParser::new();

        // Act
        let document = parser.parse(b"Top <p>x</p>", "fragment").unwrap();

        // Assert
        assert_eq!(
            document.nodes,
            vec![TextNode::text(DOCUMENT_ROOT, "Top "), TextNode::text("p", "x")]
        );
    }
}
