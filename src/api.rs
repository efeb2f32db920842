//! One-call extraction per content type.
//!
//! Each function is `Reader::new(content, root).to_list()` with the default
//! configuration (encoding fix on, system timezone).
//!
//! ```rust,no_run
//! use fbdata::api::get_friends;
//!
//! let friends = get_friends("./facebook-export")?;
//! println!("{} friends", friends.len());
//! # Ok::<(), fbdata::FbDataError>(())
//! ```

use std::path::Path;

use crate::content::ContentType;
use crate::core::record::Record;
use crate::error::Result;
use crate::reader::Reader;

fn get(content: ContentType, root: &Path) -> Result<Vec<Record>> {
    Reader::new(content, root).to_list()
}

/// `(timestamp, name)` records.
pub fn get_friends(root: impl AsRef<Path>) -> Result<Vec<Record>> {
    get(ContentType::Friends, root.as_ref())
}

/// `(name, contact)` records.
pub fn get_address_book(root: impl AsRef<Path>) -> Result<Vec<Record>> {
    get(ContentType::AddressBook, root.as_ref())
}

/// `(timestamp, content)` records.
pub fn get_posts(root: impl AsRef<Path>) -> Result<Vec<Record>> {
    get(ContentType::Posts, root.as_ref())
}

/// `(timestamp, content)` records.
pub fn get_comments(root: impl AsRef<Path>) -> Result<Vec<Record>> {
    get(ContentType::Comments, root.as_ref())
}

/// `(timestamp, reaction, title)` records.
pub fn get_reactions(root: impl AsRef<Path>) -> Result<Vec<Record>> {
    get(ContentType::Reactions, root.as_ref())
}

/// `(timestamp, ip_address, city, region, country)` records.
pub fn get_sessions(root: impl AsRef<Path>) -> Result<Vec<Record>> {
    get(ContentType::Sessions, root.as_ref())
}
