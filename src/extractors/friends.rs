//! `friends/friends.json`: one entry per friend.
//!
//! ```json
//! {"friends": [{"name": "Alice", "timestamp": 1582964988}]}
//! ```

use serde_json::Value;

use super::ExtractContext;
use crate::core::record::Field;
use crate::error::Result;

pub const COLUMNS: &[&str] = &["timestamp", "name"];

/// Extracts `(timestamp, name)`. Both fields are required.
pub fn extract_friend(record: &Value, ctx: &ExtractContext) -> Result<Vec<Field>> {
    Ok(vec![
        ctx.timestamp(record, "/timestamp")?,
        ctx.required_text(record, "/name")?,
    ])
}
