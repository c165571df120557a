use serde_json::{Map, Value};

/// The only top-level fields the automation service accepts on update.
pub const ALLOWED_UPDATE_FIELDS: [&str; 7] = [
    "name",
    "nodes",
    "connections",
    "settings",
    "staticData",
    "active",
    "tags",
];

/// A partial workflow restricted to the updatable fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowUpdate {
    fields: Map<String, Value>,
}

impl WorkflowUpdate {
    /// Keeps the allow-listed fields of `partial` and silently drops the rest.
    pub fn from_partial(partial: &Map<String, Value>) -> Self {
        let fields = ALLOWED_UPDATE_FIELDS
            .iter()
            .filter_map(|field| partial.get(*field).map(|v| (field.to_string(), v.clone())))
            .collect();
        Self { fields }
    }

    /// Same as [`WorkflowUpdate::from_partial`]; anything but an object yields an empty update.
    pub fn from_value(partial: &Value) -> Self {
        partial
            .as_object()
            .map(Self::from_partial)
            .unwrap_or_default()
    }

    /// An update that only flips the active flag.
    pub fn activation(active: bool) -> Self {
        let mut fields = Map::new();
        fields.insert("active".to_string(), Value::Bool(active));
        Self { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The request body to transmit.
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    /// Overwrites the updated fields of a raw document in place, keeping everything else.
    pub fn apply_to(&self, document: &mut Value) {
        if let Value::Object(target) = document {
            for (key, value) in &self.fields {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}
