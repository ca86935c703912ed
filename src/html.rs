use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use scraper::{Html, Node};

use crate::{
    models::{NodeKind, TextNode, DOCUMENT_ROOT},
    patterns::CHARSET_META_RE,
};

const SNIFF_LIMIT: usize = 1024;

pub struct Decoded<'a> {
    pub text: Cow<'a, str>,
    pub encoding: &'static Encoding,
    pub had_errors: bool,
}

/// Decodes raw document bytes. A byte order mark wins, then a charset
/// declared in the first kilobyte of markup, then UTF-8.
pub fn decode(bytes: &[u8]) -> Decoded<'_> {
    let declared = sniff_declared_encoding(bytes).unwrap_or(UTF_8);
    let (text, encoding, had_errors) = declared.decode(bytes);

    Decoded {
        text,
        encoding,
        had_errors,
    }
}

pub fn sniff_declared_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(SNIFF_LIMIT)];

    let label = CHARSET_META_RE.captures(head)?.get(1)?;
    let encoding = Encoding::for_label(label.as_bytes())?;

    // A document that declares UTF-16 in ASCII-compatible markup is UTF-8.
    if encoding == UTF_16LE || encoding == UTF_16BE {
        Some(UTF_8)
    } else {
        Some(encoding)
    }
}

/// Walks the tree in document order and copies out every text and comment
/// node together with the tag name of its immediate parent. Top-level nodes,
/// including those under the synthetic `html` element of a fragment, report
/// `[document]`.
pub fn collect_text_nodes(html: &Html) -> Vec<TextNode> {
    html.tree
        .root()
        .descendants()
        .filter_map(|node| {
            let (kind, content) = match node.value() {
                Node::Text(text) => (NodeKind::Text, text.text.to_string()),
                Node::Comment(comment) => (NodeKind::Comment, comment.comment.to_string()),
                _ => return None,
            };

            let parent_tag = match node.parent() {
                Some(parent) if is_fragment_root(parent.parent().map(|p| p.value())) => {
                    DOCUMENT_ROOT.to_string()
                }
                Some(parent) => match parent.value() {
                    Node::Element(element) => element.name().to_string(),
                    _ => DOCUMENT_ROOT.to_string(),
                },
                None => DOCUMENT_ROOT.to_string(),
            };

            Some(TextNode {
                kind,
                parent_tag,
                content,
            })
        })
        .collect()
}

fn is_fragment_root(node: Option<&Node>) -> bool {
    matches!(node, Some(Node::Fragment))
}
