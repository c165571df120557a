//! Common test utilities for building workflow documents.
use flowlens::prelude::*;
use serde_json::{Value, json};

/// Builds a node from its id, type and parameter object.
#[allow(dead_code)]
pub fn node(id: &str, node_type: &str, parameters: Value) -> Node {
    let value = json!({
        "id": id,
        "name": id,
        "type": node_type,
        "typeVersion": 1,
        "position": [0, 0],
        "parameters": parameters,
    });
    serde_json::from_value(value).expect("node fixture must parse")
}

/// A small but complete workflow touching every section of the view.
///
/// Shape: `Schedule` -> `Fetch` -> `Check` -> (`Notify` | `Log`), plus a
/// dangling edge from `Log` to a node that does not exist.
#[allow(dead_code)]
pub fn sample_workflow_json() -> Value {
    json!({
        "id": "wf-1",
        "name": "Daily report",
        "active": true,
        "createdAt": "2024-01-01T10:00:00.000Z",
        "updatedAt": "2024-01-02T12:30:00.000Z",
        "nodes": [
            {
                "id": "n-schedule",
                "name": "Schedule",
                "type": "n8n-nodes-base.scheduleTrigger",
                "typeVersion": 1.2,
                "position": [0, 0],
                "parameters": { "rule": { "interval": [{ "field": "cronExpression", "expression": "0 9 * * *" }] } }
            },
            {
                "id": "n-fetch",
                "name": "Fetch",
                "type": "n8n-nodes-base.httpRequest",
                "typeVersion": 4,
                "position": [200, 0],
                "parameters": { "method": "POST", "url": "https://x/y" },
                "credentials": { "httpHeaderAuth": { "id": "7", "name": "Header Auth" } }
            },
            {
                "id": "n-check",
                "name": "Check",
                "type": "n8n-nodes-base.if",
                "typeVersion": 2,
                "position": [400, 0],
                "parameters": {
                    "conditions": {
                        "combinator": "or",
                        "conditions": [
                            { "leftValue": "={{ $json.count }}", "rightValue": 10, "operator": { "operation": "gt" } },
                            { "leftValue": "={{ $json.status }}", "rightValue": "ok", "operator": { "operation": "equals" } }
                        ]
                    }
                }
            },
            {
                "id": "n-notify",
                "name": "Notify",
                "type": "n8n-nodes-base.gmail",
                "typeVersion": 2,
                "position": [600, -100],
                "parameters": { "operation": "send", "toList": "a@b.com", "subject": "Report", "message": "Done" }
            },
            {
                "id": "n-log",
                "name": "Log",
                "type": "acme-nodes.logger",
                "typeVersion": 1,
                "position": [600, 100],
                "parameters": {},
                "disabled": true,
                "notes": "Kept for debugging"
            }
        ],
        "connections": {
            "Schedule": { "main": [[{ "node": "Fetch", "type": "main", "index": 0 }]] },
            "Fetch": { "main": [[{ "node": "Check", "type": "main", "index": 0 }]] },
            "Check": {
                "main": [
                    [{ "node": "Notify", "type": "main", "index": 0 }],
                    [{ "node": "Log", "type": "main", "index": 0 }]
                ]
            },
            "Log": { "main": [[{ "node": "Archive", "type": "main", "index": 0 }]] }
        },
        "settings": { "executionOrder": "v1", "saveManualExecutions": true, "saveDataErrorExecution": "all" },
        "staticData": null,
        "tags": [{ "id": "1", "name": "reports" }, { "id": "2", "name": "daily" }],
        "versionId": "abc-123"
    })
}

#[allow(dead_code)]
pub fn sample_workflow() -> Workflow {
    Workflow::from_value(sample_workflow_json()).expect("sample workflow must parse")
}
