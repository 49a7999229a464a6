use crate::shared::Result;
use serde_json::{Map, Value};

/// SbomDocumentFormatter service for canonical JSON output
///
/// Object keys are sorted at every nesting level and the document is
/// pretty-printed with two-space indentation and a trailing newline, so
/// formatting is idempotent and independent of the input key order.
pub struct SbomDocumentFormatter;

impl SbomDocumentFormatter {
    /// Parses `content` and returns its canonical rendering
    ///
    /// # Errors
    /// Returns an error if `content` is not valid JSON
    pub fn format(content: &str) -> Result<String> {
        let document: Value = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Invalid JSON document: {}", e))?;
        let mut output = serde_json::to_string_pretty(&Self::sort_keys(document))?;
        output.push('\n');
        Ok(output)
    }

    fn sort_keys(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let mut entries: Vec<(String, Value)> = map.into_iter().collect();
                entries.sort_by(|a, b| a.0.cmp(&b.0));
                let sorted: Map<String, Value> = entries
                    .into_iter()
                    .map(|(key, value)| (key, Self::sort_keys(value)))
                    .collect();
                Value::Object(sorted)
            }
            Value::Array(items) => Value::Array(items.into_iter().map(Self::sort_keys).collect()),
            other => other,
        }
    }
}
