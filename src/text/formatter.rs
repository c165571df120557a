use crate::graph::SourceConnections;
use crate::render::{Block, DisplayFragment, Envelope, MessageBody};
use crate::view::{NodeView, Section, WorkflowView};
use itertools::Itertools;
use std::fmt;

/// Paints a `WorkflowView` as indented plain text.
pub struct ViewFormatter;

impl ViewFormatter {
    pub fn format_view(view: &WorkflowView) -> String {
        DisplayView(view).to_string()
    }

    pub fn format_fragment(fragment: &DisplayFragment) -> String {
        DisplayBlocks {
            fragment,
            indent: 0,
        }
        .to_string()
    }
}

/// `Display` adapter for a whole view.
pub struct DisplayView<'a>(pub &'a WorkflowView);

impl fmt::Display for DisplayView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        let meta = &view.metadata;
        writeln!(f, "== {} ==", meta.name)?;
        writeln!(f, "Status:  {}", meta.status)?;
        writeln!(f, "ID:      {}", meta.id)?;
        writeln!(f, "Nodes:   {} nodes", meta.node_count)?;
        writeln!(f, "Created: {}", meta.created_at)?;
        writeln!(f, "Updated: {}", meta.updated_at)?;

        if let Some(settings) = &view.settings {
            writeln!(f, "\n-- Settings --")?;
            for setting in settings {
                writeln!(f, "{}: {}", setting.label, setting.value)?;
            }
        }

        writeln!(f, "\n-- Nodes ({}) --", view.nodes.len())?;
        for node in &view.nodes {
            fmt_node(f, node)?;
        }

        writeln!(f, "\n-- Connections --")?;
        for source in &view.connections {
            fmt_connections(f, source)?;
        }

        if !view.tags.is_empty() {
            writeln!(f, "\n-- Tags --")?;
            writeln!(f, "{}", view.tags.iter().map(|t| &t.name).join(", "))?;
        }
        Ok(())
    }
}

fn fmt_node(f: &mut fmt::Formatter<'_>, node: &NodeView) -> fmt::Result {
    write!(f, "\n{} [{}]", node.name, node.node_type)?;
    if node.disabled {
        write!(f, " (disabled)")?;
    }
    writeln!(f)?;
    writeln!(
        f,
        "  Type Version: {}  Position: {}",
        node.type_version, node.position
    )?;
    fmt_section(f, &node.parameters)?;
    if let Some(credentials) = &node.credentials {
        fmt_section(f, credentials)?;
    }
    if let Some(notes) = &node.notes {
        writeln!(f, "  Notes: {}", notes)?;
    }
    Ok(())
}

fn fmt_section(f: &mut fmt::Formatter<'_>, section: &Section) -> fmt::Result {
    let marker = if section.expanded { '▼' } else { '▶' };
    writeln!(f, "  {} {}", marker, section.summary())?;
    if let Some(fragment) = &section.content {
        write!(f, "{}", DisplayBlocks { fragment, indent: 4 })?;
    }
    Ok(())
}

fn fmt_connections(f: &mut fmt::Formatter<'_>, source: &SourceConnections) -> fmt::Result {
    writeln!(f, "{}", source.source)?;
    for port in &source.ports {
        writeln!(f, "  {}:", port.name)?;
        for group in &port.groups {
            for edge in group {
                writeln!(
                    f,
                    "    → {} ({}, index: {})",
                    edge.node, edge.port_type, edge.index
                )?;
            }
        }
    }
    Ok(())
}

struct DisplayBlocks<'a> {
    fragment: &'a DisplayFragment,
    indent: usize,
}

impl fmt::Display for DisplayBlocks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pad = " ".repeat(self.indent);
        if let Some(header) = &self.fragment.header {
            write!(f, "{}{} {}", pad, header.icon, header.title)?;
            if let Some(badge) = &header.badge {
                write!(f, "  [{}]", badge)?;
            }
            writeln!(f)?;
        }
        for block in &self.fragment.blocks {
            fmt_block(f, block, &pad)?;
        }
        Ok(())
    }
}

fn fmt_block(f: &mut fmt::Formatter<'_>, block: &Block, pad: &str) -> fmt::Result {
    match block {
        Block::Badge { text, .. } => writeln!(f, "{}[{}]", pad, text),
        Block::Inline { label, text } => writeln!(f, "{}{}: {}", pad, label, text),
        Block::Code { source } => fmt_preformatted(f, source, pad),
        Block::Pairs {
            label,
            separator,
            items,
        } => {
            writeln!(f, "{}{}:", pad, label)?;
            for item in items {
                writeln!(f, "{}  {} {} {}", pad, item.name, separator, item.value)?;
            }
            Ok(())
        }
        Block::Entry { key, value } => {
            if value.is_block() {
                writeln!(f, "{}{}:", pad, key)?;
                fmt_preformatted(f, &value.to_string(), pad)
            } else {
                writeln!(f, "{}{}: {}", pad, key, value)
            }
        }
        Block::Condition {
            left,
            operator,
            right,
        } => writeln!(f, "{}{} {} {}", pad, left, operator, right),
        Block::Separator { text } => writeln!(f, "{}  {}", pad, text.to_uppercase()),
        Block::Assignment {
            name,
            value,
            declared_type,
        } => {
            write!(f, "{}{} = {}", pad, name, value)?;
            if let Some(kind) = declared_type {
                write!(f, " ({})", kind)?;
            }
            writeln!(f)
        }
        Block::Envelope(envelope) => fmt_envelope(f, envelope, pad),
        Block::Placeholder { text } => writeln!(f, "{}{}", pad, text),
    }
}

fn fmt_envelope(f: &mut fmt::Formatter<'_>, envelope: &Envelope, pad: &str) -> fmt::Result {
    writeln!(f, "{}To: {}", pad, envelope.to)?;
    if let Some(cc) = &envelope.cc {
        writeln!(f, "{}Cc: {}", pad, cc)?;
    }
    if let Some(bcc) = &envelope.bcc {
        writeln!(f, "{}Bcc: {}", pad, bcc)?;
    }
    if let Some(subject) = &envelope.subject {
        writeln!(f, "{}Subject: {}", pad, subject)?;
    }
    match &envelope.body {
        Some(MessageBody::Inline { text }) => fmt_preformatted(f, text, pad)?,
        Some(MessageBody::Collapsible {
            summary,
            text,
            expanded,
            ..
        }) => {
            let marker = if *expanded { '▼' } else { '▶' };
            writeln!(f, "{}{} {}", pad, marker, summary)?;
            if *expanded {
                fmt_preformatted(f, text, pad)?;
            }
        }
        None => {}
    }
    if envelope.attachment_count() > 0 {
        writeln!(
            f,
            "{}Attachments ({}): {}",
            pad,
            envelope.attachment_count(),
            envelope.attachments.join(", ")
        )?;
    }
    Ok(())
}

fn fmt_preformatted(f: &mut fmt::Formatter<'_>, text: &str, pad: &str) -> fmt::Result {
    for line in text.lines() {
        writeln!(f, "{}  | {}", pad, line)?;
    }
    Ok(())
}

