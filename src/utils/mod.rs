//! Small shared helpers.

pub mod json_path;

pub use json_path::PathMapper;

/// Shorten an identifier for progress messages (first 10 characters).
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(10) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}
