//! Tests for the renderer registry and the type-specific renderers.
mod common;
use common::*;
use flowlens::prelude::*;
use flowlens::render::{
    GenericRenderer, Header, MessageBody, NO_PARAMETERS, Theme, method_theme, node_types,
};
use serde_json::json;

fn registry() -> RendererRegistry {
    RendererRegistry::new()
}

#[test]
fn test_unknown_type_matches_fallback() {
    let params = json!({ "foo": "bar", "count": 3, "nested": { "a": [1, 2] } });
    let unknown = node("n1", "acme.unknownThing", params);
    assert!(!registry().is_known("acme.unknownThing"));
    assert_eq!(registry().render(&unknown), GenericRenderer.render(&unknown));
}

#[test]
fn test_dispatch_is_exact_match() {
    // A prefix or differently-cased identifier is not a known type.
    let near_miss = node("n1", "n8n-nodes-base.httpRequestV2", json!({ "method": "POST" }));
    assert_eq!(registry().render(&near_miss).header, None);

    let cased = node("n2", "N8N-NODES-BASE.HTTPREQUEST", json!({}));
    assert_eq!(
        registry().render(&cased).blocks,
        vec![Block::placeholder(NO_PARAMETERS)]
    );
}

#[test]
fn test_generic_lists_entries_in_order() {
    let params: serde_json::Value =
        serde_json::from_str(r#"{"zeta": "z", "alpha": null, "mid": ""}"#).unwrap();
    let fragment = registry().render(&node("n1", "acme.thing", params));
    assert_eq!(
        fragment.blocks,
        vec![
            Block::Entry {
                key: "zeta".to_string(),
                value: RenderableValue::ShortString("z".to_string()),
            },
            Block::Entry {
                key: "alpha".to_string(),
                value: RenderableValue::Absent,
            },
            Block::Entry {
                key: "mid".to_string(),
                value: RenderableValue::EmptyString,
            },
        ]
    );
}

#[test]
fn test_http_request() {
    let params = json!({
        "method": "POST",
        "url": "https://x/y",
        "queryParameters": { "parameters": [{ "name": "page", "value": 2 }] },
        "headerParameters": { "parameters": [{ "name": "Accept", "value": "application/json" }] },
        "body": { "hello": "world" }
    });
    let fragment = registry().render(&node("n1", node_types::HTTP_REQUEST, params));

    assert_eq!(
        fragment.blocks[0],
        Block::Badge {
            text: "POST".to_string(),
            theme: Theme::Green,
        }
    );
    assert_eq!(
        fragment.blocks[1],
        Block::Inline {
            label: "URL".to_string(),
            text: "https://x/y".to_string(),
        }
    );
    match &fragment.blocks[2] {
        Block::Pairs { label, items, .. } => {
            assert_eq!(label, "Query Parameters");
            assert_eq!(items[0].name, "page");
            assert_eq!(items[0].value, "2");
        }
        other => panic!("expected query pairs, got {:?}", other),
    }
    assert!(matches!(&fragment.blocks[3], Block::Pairs { label, .. } if label == "Headers"));
    assert!(matches!(
        &fragment.blocks[4],
        Block::Entry { key, value: RenderableValue::Structured(_) } if key == "Body"
    ));
}

#[test]
fn test_http_method_defaults_to_get_color() {
    let implicit = registry().render(&node("n1", node_types::HTTP_REQUEST, json!({})));
    let explicit = registry().render(&node(
        "n2",
        node_types::HTTP_REQUEST,
        json!({ "method": "GET" }),
    ));
    assert_eq!(implicit.blocks[0], explicit.blocks[0]);
    assert_eq!(method_theme("OPTIONS"), method_theme("GET"));

    // Absent body, empty lists: no extra blocks.
    assert_eq!(implicit.blocks.len(), 2);
}

#[test]
fn test_http_malformed_parameters_degrade() {
    let params = json!({
        "method": 7,
        "url": ["not", "a", "string"],
        "queryParameters": "oops",
        "headerParameters": { "parameters": { "not": "a list" } },
        "body": ""
    });
    let fragment = registry().render(&node("n1", node_types::HTTP_REQUEST, params));
    assert_eq!(
        fragment.blocks,
        vec![
            Block::Badge {
                text: "GET".to_string(),
                theme: Theme::Blue,
            },
            Block::Inline {
                label: "URL".to_string(),
                text: String::new(),
            },
        ]
    );
}

#[test]
fn test_code_node() {
    let fragment = registry().render(&node(
        "n1",
        node_types::CODE,
        json!({ "mode": "runOnceForAllItems", "jsCode": "return items;" }),
    ));
    let header = fragment.header.unwrap();
    assert_eq!(header.badge.as_deref(), Some("Run Once For All Items"));
    assert_eq!(
        fragment.blocks,
        vec![Block::Code {
            source: "return items;".to_string(),
        }]
    );

    let fallback = registry().render(&node(
        "n2",
        node_types::CODE,
        json!({ "code": "print(1)" }),
    ));
    assert_eq!(
        fallback.header.unwrap().badge.as_deref(),
        Some("Run Once For Each Item")
    );
    assert_eq!(
        fallback.blocks,
        vec![Block::Code {
            source: "print(1)".to_string(),
        }]
    );
}

#[test]
fn test_branch_separators_between_conditions() {
    let conditions: Vec<_> = (0..4)
        .map(|i| json!({ "leftValue": format!("v{}", i), "rightValue": i, "operator": { "operation": "lte" } }))
        .collect();
    let fragment = registry().render(&node(
        "n1",
        node_types::BRANCH,
        json!({ "conditions": { "combinator": "or", "conditions": conditions } }),
    ));

    let separators = fragment.count_blocks(|b| matches!(b, Block::Separator { .. }));
    assert_eq!(separators, 3);
    assert!(matches!(fragment.blocks[0], Block::Condition { .. }));
    assert!(matches!(fragment.blocks.last(), Some(Block::Condition { .. })));
    for (idx, block) in fragment.blocks.iter().enumerate() {
        let expect_separator = idx % 2 == 1;
        assert_eq!(matches!(block, Block::Separator { text } if text == "or"), expect_separator);
    }
}

#[test]
fn test_branch_operators() {
    let params = json!({
        "conditions": {
            "conditions": [
                { "leftValue": "a", "rightValue": "b", "operator": { "operation": "notEquals" } },
                { "leftValue": "a", "rightValue": "b", "operator": { "operation": "startsWith" } },
                { "leftValue": "", "operator": {} },
                { "leftValue": 0, "rightValue": 0, "operator": { "operation": "equals" } },
                { "leftValue": false, "rightValue": false, "operator": { "operation": "equals" } }
            ]
        }
    });
    let fragment = registry().render(&node("n1", node_types::BRANCH, params));
    let conditions: Vec<_> = fragment
        .blocks
        .iter()
        .filter_map(|b| match b {
            Block::Condition { left, operator, right } => Some((left.as_str(), operator.as_str(), right.as_str())),
            _ => None,
        })
        .collect();
    assert_eq!(
        conditions,
        vec![
            ("a", "≠", "b"),
            ("a", "startsWith", "b"),
            ("(empty)", "?", "(empty)"),
            ("(empty)", "=", "0"),
            ("(empty)", "=", "false"),
        ]
    );
    // Default combinator is "and".
    assert!(fragment.blocks.contains(&Block::Separator { text: "and".to_string() }));
}

#[test]
fn test_branch_without_conditions() {
    let fragment = registry().render(&node("n1", node_types::BRANCH, json!({})));
    assert_eq!(fragment.blocks, vec![Block::placeholder("No conditions set")]);
}

#[test]
fn test_assignment_node() {
    let params = json!({
        "assignments": {
            "assignments": [
                { "name": "total", "value": 12, "type": "number" },
                { "name": "label", "value": "ok" },
                { "name": "missing" }
            ]
        },
        "includeOtherFields": false
    });
    let fragment = registry().render(&node("n1", node_types::ASSIGNMENT, params));
    assert_eq!(fragment.header.unwrap().badge, None);
    assert_eq!(
        fragment.blocks,
        vec![
            Block::Assignment {
                name: "total".to_string(),
                value: "12".to_string(),
                declared_type: Some("number".to_string()),
            },
            Block::Assignment {
                name: "label".to_string(),
                value: "ok".to_string(),
                declared_type: None,
            },
            Block::Assignment {
                name: "missing".to_string(),
                value: "(empty)".to_string(),
                declared_type: None,
            },
        ]
    );

    let keeps = registry().render(&node("n2", node_types::ASSIGNMENT, json!({})));
    assert_eq!(
        keeps.header.unwrap().badge.as_deref(),
        Some("+ Keep other fields")
    );
    assert_eq!(keeps.blocks, vec![Block::placeholder("No field assignments")]);
}

#[test]
fn test_schedule_trigger() {
    let cron = registry().render(&node(
        "n1",
        node_types::SCHEDULE_TRIGGER,
        json!({ "rule": { "interval": [{ "cronExpression": "*/5 * * * *" }] } }),
    ));
    assert_eq!(
        cron.blocks,
        vec![Block::Inline {
            label: "Schedule".to_string(),
            text: "*/5 * * * *".to_string(),
        }]
    );

    let missing = registry().render(&node(
        "n2",
        node_types::SCHEDULE_TRIGGER,
        json!({ "rule": { "interval": "daily" } }),
    ));
    assert_eq!(missing.blocks, vec![Block::placeholder("Not configured")]);
}

#[test]
fn test_mail_send_with_long_message() {
    let message = "m".repeat(600);
    let params = json!({
        "operation": "send",
        "toList": "a@b.com",
        "ccList": "c@d.com",
        "subject": "Hi",
        "message": message,
        "attachments": [{ "name": "report.pdf" }, { "filename": "raw.csv" }, {}]
    });
    let fragment = registry().render(&node("n1", node_types::MAIL, params.clone()));

    let header = fragment.header.clone().unwrap();
    assert_eq!(header, Header::new("📧", "Send Email", Theme::Red));

    let Block::Envelope(envelope) = &fragment.blocks[0] else {
        panic!("expected envelope first, got {:?}", fragment.blocks[0]);
    };
    assert_eq!(envelope.to, "a@b.com");
    assert_eq!(envelope.cc.as_deref(), Some("c@d.com"));
    assert_eq!(envelope.bcc, None);
    assert_eq!(envelope.attachment_count(), 3);
    assert_eq!(
        envelope.attachments,
        vec!["report.pdf", "raw.csv", "Attachment 3"]
    );
    match &envelope.body {
        Some(MessageBody::Collapsible {
            summary,
            length,
            expanded,
            ..
        }) => {
            assert_eq!(summary, "message length 600");
            assert_eq!(*length, 600);
            assert!(!expanded);
        }
        other => panic!("expected collapsible body, got {:?}", other),
    }

    // Every raw parameter follows the envelope.
    let entries = fragment.count_blocks(|b| matches!(b, Block::Entry { .. }));
    assert_eq!(entries, params.as_object().unwrap().len());
}

#[test]
fn test_mail_message_limit_counts_utf16_units() {
    let render_body = |message: &str| {
        let fragment = registry().render(&node(
            "n1",
            node_types::MAIL,
            json!({ "operation": "send", "toList": "a@b.com", "message": message }),
        ));
        match &fragment.blocks[0] {
            Block::Envelope(envelope) => envelope.body.clone(),
            other => panic!("expected envelope, got {:?}", other),
        }
    };

    // 250 emoji are exactly 500 units.
    let at_limit = "😀".repeat(250);
    assert_eq!(
        render_body(&at_limit),
        Some(MessageBody::Inline { text: at_limit })
    );

    match render_body(&"😀".repeat(300)) {
        Some(MessageBody::Collapsible {
            summary, length, ..
        }) => {
            assert_eq!(length, 600);
            assert_eq!(summary, "message length 600");
        }
        other => panic!("expected collapsible body, got {:?}", other),
    }
}

#[test]
fn test_mail_short_message_is_inline() {
    let fragment = registry().render(&node(
        "n1",
        node_types::MAIL,
        json!({ "operation": "reply", "to": "x@y.z", "body": "short" }),
    ));
    let Block::Envelope(envelope) = &fragment.blocks[0] else {
        panic!("expected envelope");
    };
    assert_eq!(
        envelope.body,
        Some(MessageBody::Inline {
            text: "short".to_string(),
        })
    );
}

#[test]
fn test_mail_without_recipient_or_other_operation() {
    let no_recipient = registry().render(&node(
        "n1",
        node_types::MAIL,
        json!({ "operation": "send", "message": "hi" }),
    ));
    assert!(!no_recipient
        .blocks
        .iter()
        .any(|b| matches!(b, Block::Envelope(_))));

    let labels = registry().render(&node(
        "n2",
        node_types::MAIL,
        json!({ "operation": "addLabels", "toList": "a@b.com" }),
    ));
    assert_eq!(labels.header.unwrap().title, "Add Labels");
    assert!(!labels.blocks.iter().any(|b| matches!(b, Block::Envelope(_))));

    let unknown = registry().render(&node(
        "n3",
        node_types::MAIL,
        json!({ "operation": "archive" }),
    ));
    assert_eq!(
        unknown.header.unwrap(),
        Header::new("✉️", "archive", Theme::Gray)
    );

    let empty = registry().render(&node("n4", node_types::MAIL, json!({})));
    assert_eq!(empty.header.unwrap().title, "Gmail");
    assert_eq!(empty.blocks, vec![Block::placeholder(NO_PARAMETERS)]);
}

struct LoggerRenderer;

impl NodeRenderer for LoggerRenderer {
    fn node_type(&self) -> &str {
        "acme-nodes.logger"
    }

    fn render(&self, node: &Node) -> DisplayFragment {
        DisplayFragment::new(Header::new("📝", format!("Logger {}", node.name), Theme::Gray))
    }
}

#[test]
fn test_registry_builder() {
    let registry = RendererRegistry::builder()
        .with_custom_renderer(Box::new(LoggerRenderer))
        .with_type_mapping("acme-nodes.request", node_types::HTTP_REQUEST)
        .with_type_mapping("acme-nodes.ignored", "acme-nodes.doesNotExist")
        .build();

    assert!(registry.is_known("acme-nodes.logger"));
    assert!(registry.is_known("acme-nodes.request"));
    assert!(!registry.is_known("acme-nodes.ignored"));
    assert_eq!(registry.known_types().len(), 8);

    let logger = registry.render(&node("l", "acme-nodes.logger", json!({})));
    assert_eq!(logger.header.unwrap().title, "Logger l");

    let aliased = registry.render(&node("r", "acme-nodes.request", json!({ "method": "DELETE" })));
    assert_eq!(
        aliased.blocks[0],
        Block::Badge {
            text: "DELETE".to_string(),
            theme: Theme::Red,
        }
    );
}

#[test]
fn test_type_version_does_not_select_renderer() {
    let mut v1 = node("n1", node_types::CODE, json!({ "jsCode": "1" }));
    let mut v2 = v1.clone();
    v1.type_version = 1.0;
    v2.type_version = 2.0;
    assert_eq!(registry().render(&v1), registry().render(&v2));
}
