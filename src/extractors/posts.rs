//! `posts/your_posts_1.json`: the file itself is the list of posts.
//!
//! ```json
//! [{"timestamp": 1582964988, "data": [{"post": "Hello"}]}]
//! ```
//!
//! Posts that only share a photo or link have no `data` entry.

use serde_json::Value;

use super::ExtractContext;
use crate::core::record::Field;
use crate::error::Result;

pub const COLUMNS: &[&str] = &["timestamp", "content"];

/// Extracts `(timestamp, content)`.
pub fn extract_post(record: &Value, ctx: &ExtractContext) -> Result<Vec<Field>> {
    Ok(vec![
        ctx.timestamp(record, "/timestamp")?,
        ctx.text(record, "/data/0/post")?,
    ])
}
