//! Pulls readable text out of whatever shape the oracle answered in.

use serde_json::Value;

const FENCE: &str = "```";

/// Agent frameworks sometimes wrap the answer as `{"raw": ...}` or
/// `{"tasks_output": [{"raw": ...}]}`; unwrap those, pretty-print other JSON
/// and show plain text as-is.
pub fn format_agent_output(output: &str) -> String {
    match serde_json::from_str::<Value>(output) {
        Ok(value @ (Value::Object(_) | Value::Array(_))) => format_value(&value),
        _ => output.to_string(),
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            if let Some(raw) = map.get("raw") {
                return as_text(raw);
            }
            if let Some(raw) = map
                .get("tasks_output")
                .and_then(Value::as_array)
                .and_then(|tasks| tasks.first())
                .and_then(|task| task.get("raw"))
            {
                return as_text(raw);
            }
            pretty(value)
        }
        Value::Array(items) => items
            .iter()
            .map(|item| match item.get("raw") {
                Some(raw) => as_text(raw),
                None => as_text(item),
            })
            .collect::<Vec<_>>()
            .join("\n\n"),
        other => as_text(other),
    }
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Strips a code fence the model sometimes wraps its whole answer in. Text
/// that is not fenced end to end is left alone.
pub fn clean(raw: &str) -> String {
    let trimmed = raw.trim();
    if !trimmed.starts_with(FENCE) {
        return trimmed.to_string();
    }

    // The opening fence line may carry any language tag.
    let Some((_, body)) = trimmed.split_once('\n') else {
        return trimmed.to_string();
    };
    match body.trim_end().strip_suffix(FENCE) {
        Some(inner) => inner.trim().to_string(),
        None => trimmed.to_string(),
    }
}
