use super::fragment::{Block, DisplayFragment, Envelope, Header, MessageBody, Theme};
use super::generic::entry_blocks;
use super::lookup::{field, first_text, list};
use super::{NodeRenderer, node_types};
use crate::document::Node;

/// Label, icon and theme of a mail operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationStyle {
    pub label: &'static str,
    pub icon: &'static str,
    pub theme: Theme,
}

/// Looks up a known mail operation.
pub fn operation_style(operation: &str) -> Option<OperationStyle> {
    let (label, icon, theme) = match operation {
        "send" => ("Send Email", "📧", Theme::Red),
        "reply" => ("Reply to Email", "↩️", Theme::Blue),
        "get" => ("Get Email", "📬", Theme::Green),
        "getAll" => ("Get All Emails", "📬", Theme::Green),
        "search" => ("Search Emails", "🔍", Theme::Purple),
        "addLabels" => ("Add Labels", "🏷️", Theme::Yellow),
        "removeLabels" => ("Remove Labels", "🏷️", Theme::Orange),
        _ => return None,
    };
    Some(OperationStyle { label, icon, theme })
}

/// Renders mail nodes: an operation header, an envelope for outgoing mail and
/// every raw parameter.
pub struct MailRenderer;

impl NodeRenderer for MailRenderer {
    fn node_type(&self) -> &str {
        node_types::MAIL
    }

    fn render(&self, node: &Node) -> DisplayFragment {
        let params = &node.parameters;
        let operation = first_text(params, &["operation", "resource"]);

        let header = match operation.and_then(operation_style) {
            Some(style) => Header::new(style.icon, style.label, style.theme),
            None => Header::new("✉️", operation.unwrap_or("Gmail"), Theme::Gray),
        };
        let mut fragment = DisplayFragment::new(header);

        if matches!(operation, Some("send" | "reply")) {
            if let Some(envelope) = envelope(node) {
                fragment.push(Block::Envelope(envelope));
            }
        }

        fragment.blocks.extend(entry_blocks(params));
        fragment
    }
}

/// The envelope view, present only when the mail has a recipient.
fn envelope(node: &Node) -> Option<Envelope> {
    let params = &node.parameters;
    let to = first_text(params, &["toList", "to"])?;

    let attachments = list(params, &["attachments"])
        .iter()
        .enumerate()
        .map(|(idx, attachment)| {
            field(attachment, "name")
                .or_else(|| field(attachment, "filename"))
                .map(str::to_string)
                .unwrap_or_else(|| format!("Attachment {}", idx + 1))
        })
        .collect();

    Some(Envelope {
        to: to.to_string(),
        cc: first_text(params, &["ccList", "cc"]).map(str::to_string),
        bcc: first_text(params, &["bccList", "bcc"]).map(str::to_string),
        subject: first_text(params, &["subject"]).map(str::to_string),
        body: first_text(params, &["message", "body"]).map(MessageBody::new),
        attachments,
    })
}
