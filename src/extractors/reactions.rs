//! `likes_and_reactions/posts_and_comments.json`.
//!
//! ```json
//! {"reactions": [{"timestamp": 1582964988, "title": "Alice likes Bob's post.",
//!   "data": [{"reaction": {"reaction": "LIKE", "actor": "Alice"}}]}]}
//! ```

use serde_json::Value;

use super::ExtractContext;
use crate::core::record::Field;
use crate::error::Result;

pub const COLUMNS: &[&str] = &["timestamp", "reaction", "title"];

/// Extracts `(timestamp, reaction, title)`. The reaction kind is an ASCII
/// enum name and is copied verbatim.
pub fn extract_reaction(record: &Value, ctx: &ExtractContext) -> Result<Vec<Field>> {
    Ok(vec![
        ctx.timestamp(record, "/timestamp")?,
        ctx.raw_text(record, "/data/0/reaction/reaction"),
        ctx.text(record, "/title")?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentType;
    use crate::extractors::test_context;
    use serde_json::json;

    #[test]
    fn test_extract_reaction() {
        let ctx = test_context(ContentType::Reactions);
        let record = json!({
            "timestamp": 1582964988,
            "title": "Alice likes Bob's post.",
            "data": [{"reaction": {"reaction": "HAHA", "actor": "Alice"}}]
        });
        let fields = extract_reaction(&record, &ctx).unwrap();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[1], Field::from("HAHA"));
        assert_eq!(fields[2], Field::from("Alice likes Bob's post."));
    }

    #[test]
    fn test_reaction_without_title_or_data() {
        let ctx = test_context(ContentType::Reactions);
        let fields = extract_reaction(&json!({"timestamp": 0}), &ctx).unwrap();
        assert!(fields[1].is_empty());
        assert!(fields[2].is_empty());
    }
}
