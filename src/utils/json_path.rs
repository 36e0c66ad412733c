//! Dot-notation path lookup over loosely shaped JSON outcomes.
//!
//! Supports:
//! - Nested path access (e.g., "result.processId")
//! - Array indexing (e.g., "results.edges[0].node")
//! - Candidate lists, where the first path holding a non-empty string wins

use serde_json::Value;

/// Path mapper for extracting values from JSON using dot-notation paths
pub struct PathMapper;

impl PathMapper {
    /// Get value from JSON using dot-notation path (supports array indexing)
    ///
    /// Examples:
    /// - "processId"
    /// - "result.messageId"
    /// - "results.edges[0]"
    pub fn get_path<'a>(obj: &'a Value, path: &str) -> Option<&'a Value> {
        if path.is_empty() {
            return None;
        }

        // Remove leading "$." if present (JSONPath style)
        let normalized = path.trim().trim_start_matches("$.");
        let mut current = obj;

        for part in normalized.split('.') {
            if part.is_empty() {
                return None;
            }

            if let Some(bracket_pos) = part.find('[') {
                let key = &part[..bracket_pos];
                let idx_str = part[bracket_pos + 1..].trim_end_matches(']');

                if !key.is_empty() {
                    current = current.as_object()?.get(key)?;
                }

                let idx = idx_str.parse::<usize>().ok()?;
                current = current.as_array()?.get(idx)?;
            } else {
                match current {
                    Value::Object(map) => {
                        current = map.get(part)?;
                    }
                    Value::Array(arr) => {
                        let idx = part.parse::<usize>().ok()?;
                        current = arr.get(idx)?;
                    }
                    _ => return None,
                }
            }
        }

        Some(current)
    }

    /// Get a string value from path. Non-string leaves are not coerced.
    pub fn get_str<'a>(obj: &'a Value, path: &str) -> Option<&'a str> {
        Self::get_path(obj, path).and_then(Value::as_str)
    }

    /// Try each candidate path in order and return the first non-empty string.
    ///
    /// An empty identifier is treated as absent so the next candidate gets a chance.
    pub fn first_str<'a>(obj: &'a Value, candidates: &[&str]) -> Option<&'a str> {
        candidates
            .iter()
            .filter_map(|path| Self::get_str(obj, path))
            .find(|s| !s.is_empty())
    }
}
