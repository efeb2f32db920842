//! `about_you/your_address_books.json`: uploaded phone contacts.
//!
//! ```json
//! {"address_book": {"address_book": [
//!   {"name": "Alice", "details": [{"contact_point": "+123"}]}
//! ]}}
//! ```

use serde_json::Value;

use super::ExtractContext;
use crate::core::record::Field;
use crate::error::Result;

pub const COLUMNS: &[&str] = &["name", "contact"];

/// Extracts `(name, contact)`. The contact is the first detail's
/// `contact_point`, or empty when the contact has no details.
pub fn extract_contact(record: &Value, ctx: &ExtractContext) -> Result<Vec<Field>> {
    Ok(vec![
        ctx.required_text(record, "/name")?,
        ctx.raw_text(record, "/details/0/contact_point"),
    ])
}
