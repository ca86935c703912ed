mod html;
mod patterns;

pub mod error;
pub mod extractor;
pub mod fetch;
pub mod models;
pub mod parse;

pub use error::{ExtractError, FetchError, ParseError};
pub use extractor::{TextExtractor, BASELINE_EXCLUDED_TAGS};
pub use fetch::{DocumentFetcher, FetchConfig, HttpFetcher};
pub use models::{ExtractedPage, NodeKind, ParsedDocument, TextNode, DOCUMENT_ROOT};
pub use parse::{HtmlParser, ScraperParser, DEFAULT_BACKEND};
