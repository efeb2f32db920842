//! Batch CSV export of every content type.
//!
//! # Example
//!
//! ```rust,no_run
//! use fbdata::config::ExportConfig;
//! use fbdata::export::{save_all, save_all_with_config};
//!
//! // Fails on the first content type that cannot be exported
//! let paths = save_all("./facebook-export", "./csv")?;
//!
//! // Tolerate exports that leave some content types out
//! let config = ExportConfig::new().with_skip_missing(true);
//! let paths = save_all_with_config("./facebook-export", "./csv", &config)?;
//! # Ok::<(), fbdata::FbDataError>(())
//! ```

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::ExportConfig;
use crate::content::ContentType;
use crate::error::Result;
use crate::reader::Reader;

/// Writes one CSV per content type with default configuration.
///
/// Returns written paths in table order. Any failure, including a content
/// type missing from the export, aborts the batch.
pub fn save_all(root: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    save_all_with_config(root, output_dir, &ExportConfig::default())
}

/// Writes one CSV per content type.
///
/// With [`ExportConfig::skip_missing`] a content type whose file is absent is
/// logged and skipped; every other error still aborts the batch.
pub fn save_all_with_config(
    root: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    config: &ExportConfig,
) -> Result<Vec<PathBuf>> {
    save_selected(root, output_dir, ContentType::all(), config)
}

/// Writes one CSV for each of `contents`, in the given order.
///
/// Same failure policy as [`save_all_with_config`].
pub fn save_selected(
    root: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    contents: &[ContentType],
    config: &ExportConfig,
) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let output_dir = output_dir.as_ref();
    let mut written = Vec::with_capacity(contents.len());

    for &content in contents {
        let reader = Reader::with_config(content, root, config.reader.clone());
        match reader.save_csv(output_dir) {
            Ok(path) => {
                info!(content = %content, path = %path.display(), "exported");
                written.push(path);
            }
            Err(e) if config.skip_missing && e.is_not_found() => {
                warn!(content = %content, error = %e, "skipping content type missing from export");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(written)
}
