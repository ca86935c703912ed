use serde::Serialize;

/// Tag name reported for nodes hanging directly off the document root.
pub const DOCUMENT_ROOT: &str = "[document]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Text,
    Comment,
}

/// A text-bearing node read out of a parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    pub kind: NodeKind,
    pub parent_tag: String,
    pub content: String,
}

impl TextNode {
    pub fn text(parent_tag: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text,
            parent_tag: parent_tag.into(),
            content: content.into(),
        }
    }

    pub fn comment(parent_tag: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Comment,
            parent_tag: parent_tag.into(),
            content: content.into(),
        }
    }

    pub fn is_comment(&self) -> bool {
        self.kind == NodeKind::Comment
    }
}

/// Text and comment nodes of one document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    pub nodes: Vec<TextNode>,
}

impl ParsedDocument {
    pub fn text_nodes(&self) -> impl Iterator<Item = &TextNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl From<Vec<TextNode>> for ParsedDocument {
    fn from(nodes: Vec<TextNode>) -> Self {
        Self { nodes }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedPage {
    pub url: String,
    pub backend: String,
    pub fragments: usize,
    pub text: String,
}
