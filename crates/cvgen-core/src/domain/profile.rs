//! The parsed career-profile document and the render context built from it.

use serde::Serialize;
use serde_json::{Map, Value};

/// Parsed structured career data, created once per generation run.
///
/// Content files are free-form tables; fields the templates do not know
/// about are passed through verbatim. Absent sections resolve to empty
/// mappings/strings, never to an error — downstream builders must tolerate
/// sparse documents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileDocument {
    root: Map<String, Value>,
}

impl ProfileDocument {
    /// Wrap a parsed document value. Non-object values yield an empty
    /// document rather than failing — a degenerate content file produces
    /// empty output, not a crash.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(root) => Self { root },
            _ => Self::default(),
        }
    }

    /// A top-level section as a mapping; empty when absent or not a table.
    pub fn section(&self, name: &str) -> Map<String, Value> {
        match self.root.get(name) {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        }
    }

    /// A string field inside a section; empty when absent or not a string.
    pub fn text(&self, section: &str, field: &str) -> String {
        match self.root.get(section).and_then(|s| s.get(field)) {
            Some(Value::String(s)) => s.clone(),
            _ => String::new(),
        }
    }

    /// The person's display name (`personal.name`), used for filename stems
    /// and confirmation output.
    pub fn person_name(&self) -> String {
        self.text("personal", "name")
    }
}

/// Flat mapping of template variable names to values, produced fresh per
/// document type per run and handed to the renderer port. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RenderContext {
    entries: Map<String, Value>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable, replacing any previous value under the same name.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// The context as one JSON value, the shape renderers consume.
    pub fn to_value(&self) -> Value {
        Value::Object(self.entries.clone())
    }
}
