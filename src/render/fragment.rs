use crate::expansion::{ExpansionKey, ExpansionState};
use crate::value::{RenderableValue, text_length};
use serde::Serialize;

/// Mail bodies longer than this many UTF-16 code units are collapsed behind an expander.
pub const MESSAGE_PREVIEW_LIMIT: usize = 500;

/// Color theme keyword. How a theme is painted is up to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Theme {
    Blue,
    Green,
    Yellow,
    Red,
    Purple,
    Orange,
    Cyan,
    Gray,
}

/// Title line of a specialized fragment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub icon: String,
    pub title: String,
    pub theme: Theme,
    pub badge: Option<String>,
}

impl Header {
    pub fn new(icon: &str, title: impl Into<String>, theme: Theme) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.into(),
            theme,
            badge: None,
        }
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }
}

/// A `name <sep> value` row, e.g. a query parameter or header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pair {
    pub name: String,
    pub value: String,
}

/// Body of an envelope-style mail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MessageBody {
    Inline { text: String },
    /// Collapsed by default; the text is only shown once `expanded` is set.
    Collapsible {
        summary: String,
        length: usize,
        text: String,
        expanded: bool,
    },
}

impl MessageBody {
    pub fn new(text: &str) -> Self {
        let length = text_length(text);
        if length > MESSAGE_PREVIEW_LIMIT {
            MessageBody::Collapsible {
                summary: format!("message length {}", length),
                length,
                text: text.to_string(),
                expanded: false,
            }
        } else {
            MessageBody::Inline {
                text: text.to_string(),
            }
        }
    }
}

/// Envelope view of an outgoing mail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope {
    pub to: String,
    pub cc: Option<String>,
    pub bcc: Option<String>,
    pub subject: Option<String>,
    pub body: Option<MessageBody>,
    pub attachments: Vec<String>,
}

impl Envelope {
    pub fn attachment_count(&self) -> usize {
        self.attachments.len()
    }
}

/// One element of a rendered node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "block", rename_all = "camelCase")]
pub enum Block {
    /// A short colored label, e.g. an HTTP method.
    Badge { text: String, theme: Theme },
    /// A labelled one-line value shown verbatim.
    Inline { label: String, text: String },
    /// Source code shown verbatim in a fixed-width block.
    Code { source: String },
    /// A labelled list of name/value rows.
    Pairs {
        label: String,
        separator: String,
        items: Vec<Pair>,
    },
    /// A key with its classified value.
    Entry { key: String, value: RenderableValue },
    Condition {
        left: String,
        operator: String,
        right: String,
    },
    /// Joins two neighbouring blocks, e.g. a boolean combinator.
    Separator { text: String },
    Assignment {
        name: String,
        value: String,
        declared_type: Option<String>,
    },
    Envelope(Envelope),
    /// Stands in for content that is not there.
    Placeholder { text: String },
}

impl Block {
    pub fn placeholder(text: &str) -> Self {
        Block::Placeholder {
            text: text.to_string(),
        }
    }
}

/// The display model of one node's configuration. Pure data, no markup.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DisplayFragment {
    pub header: Option<Header>,
    pub blocks: Vec<Block>,
}

impl DisplayFragment {
    pub fn new(header: Header) -> Self {
        Self {
            header: Some(header),
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Number of blocks of a given shape, mostly useful for inspection.
    pub fn count_blocks(&self, predicate: impl Fn(&Block) -> bool) -> usize {
        self.blocks.iter().filter(|b| predicate(b)).count()
    }

    /// Opens the collapsible regions owned by `node_id` that `state` marks as expanded.
    pub fn apply_expansion(&mut self, node_id: &str, state: &ExpansionState) {
        let message_key = ExpansionKey::message(node_id);
        for block in &mut self.blocks {
            if let Block::Envelope(Envelope {
                body: Some(MessageBody::Collapsible { expanded, .. }),
                ..
            }) = block
            {
                *expanded = state.is_expanded(&message_key);
            }
        }
    }
}
