//! `comments/comments.json`: comments written by the account owner.
//!
//! ```json
//! {"comments": [{"timestamp": 1582964988, "title": "Alice commented on Bob's post.",
//!   "data": [{"comment": {"timestamp": 1582964988, "comment": "Nice!", "author": "Alice"}}]}]}
//! ```

use serde_json::Value;

use super::ExtractContext;
use crate::core::record::Field;
use crate::error::Result;

pub const COLUMNS: &[&str] = &["timestamp", "content"];

/// Extracts `(timestamp, content)`. Content is empty for comments without
/// text (stickers, photos).
pub fn extract_comment(record: &Value, ctx: &ExtractContext) -> Result<Vec<Field>> {
    Ok(vec![
        ctx.timestamp(record, "/timestamp")?,
        ctx.text(record, "/data/0/comment/comment")?,
    ])
}
