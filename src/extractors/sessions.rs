//! `security_and_login_information/account_activity.json`.
//!
//! ```json
//! {"account_activity": [{"action": "Login", "timestamp": 1582964988,
//!   "ip_address": "203.0.113.7", "city": "Berlin", "region": "Berlin", "country": "DE"}]}
//! ```

use serde_json::Value;

use super::ExtractContext;
use crate::core::record::Field;
use crate::error::Result;

pub const COLUMNS: &[&str] = &["timestamp", "ip_address", "city", "region", "country"];

/// Extracts `(timestamp, ip_address, city, region, country)`.
///
/// Place names can carry non-ASCII text and are normalized; the IP address
/// and ISO country code are copied verbatim.
pub fn extract_session(record: &Value, ctx: &ExtractContext) -> Result<Vec<Field>> {
    Ok(vec![
        ctx.timestamp(record, "/timestamp")?,
        ctx.raw_text(record, "/ip_address"),
        ctx.text(record, "/city")?,
        ctx.text(record, "/region")?,
        ctx.raw_text(record, "/country"),
    ])
}
