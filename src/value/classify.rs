use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Strings longer than this many UTF-16 code units render as a text block.
pub const SHORT_STRING_LIMIT: usize = 100;

/// How a single parameter value should be displayed, with the data to display it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum RenderableValue {
    /// Null or missing.
    Absent,
    Boolean(bool),
    /// Decimal text of the number as supplied.
    Number(String),
    /// Explicitly set to the empty string.
    EmptyString,
    /// Rendered inline and quoted.
    ShortString(String),
    /// Rendered as a preformatted block, unquoted.
    LongText(String),
    /// Pretty-printed serialization of an array or object.
    Structured(String),
    /// Last-resort stringification.
    Other(String),
}

/// Classifies any JSON value. Total: never fails and never panics.
pub fn classify(value: &Value) -> RenderableValue {
    match value {
        Value::Null => RenderableValue::Absent,
        Value::Bool(b) => RenderableValue::Boolean(*b),
        Value::Number(n) => RenderableValue::Number(n.to_string()),
        Value::String(s) => classify_str(s),
        Value::Array(_) | Value::Object(_) => match serde_json::to_string_pretty(value) {
            Ok(pretty) => RenderableValue::Structured(pretty),
            Err(_) => RenderableValue::Other(value.to_string()),
        },
    }
}

/// Classifies a value that may not be present at all.
pub fn classify_opt(value: Option<&Value>) -> RenderableValue {
    value.map(classify).unwrap_or(RenderableValue::Absent)
}

/// Classification of string values on their own.
pub fn classify_str(s: &str) -> RenderableValue {
    if s.is_empty() {
        RenderableValue::EmptyString
    } else if text_length(s) > SHORT_STRING_LIMIT || s.contains('\n') {
        RenderableValue::LongText(s.to_string())
    } else {
        RenderableValue::ShortString(s.to_string())
    }
}

impl RenderableValue {
    /// Whether the value is shown as a multi-line block rather than inline.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            RenderableValue::LongText(_) | RenderableValue::Structured(_)
        )
    }
}

impl fmt::Display for RenderableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderableValue::Absent => write!(f, "(not set)"),
            RenderableValue::Boolean(b) => write!(f, "{}", b),
            RenderableValue::Number(n) => write!(f, "{}", n),
            RenderableValue::EmptyString => write!(f, "(empty)"),
            RenderableValue::ShortString(s) => write!(f, "\"{}\"", s),
            RenderableValue::LongText(s)
            | RenderableValue::Structured(s)
            | RenderableValue::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Coerces a value to plain display text, the way it reads inline.
///
/// Strings are returned unquoted; arrays and objects collapse to compact JSON.
pub fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Length of a string in UTF-16 code units, the unit both display thresholds are defined in.
///
/// Characters outside the Basic Multilingual Plane (most emoji) count twice.
pub fn text_length(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Whether a value reads as "nothing set": null, `false`, zero or the empty string.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Display text of a workflow setting: booleans read as Yes/No.
pub fn setting_string(value: &Value) -> String {
    match value {
        Value::Bool(true) => "Yes".to_string(),
        Value::Bool(false) => "No".to_string(),
        other => display_string(other),
    }
}

/// Turns a camelCase key into a label, e.g. `saveManualExecutions` -> `Save Manual Executions`.
pub fn humanize_key(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            label.push(' ');
            label.push(c);
        } else {
            label.push(c);
        }
    }
    label
}
