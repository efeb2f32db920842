//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure
//! - [`Content`] - content type selector with CLI-friendly names

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{ExportConfig, ReaderConfig, parse_timezone};
use crate::content::ContentType;
use crate::error::Result;

/// Extract friends, posts, comments, reactions, sessions and contacts from an
/// unzipped Facebook data export into CSV files.
#[derive(Parser, Debug, Clone)]
#[command(name = "fbdata")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    fbdata ./facebook-me
    fbdata ./facebook-me friends posts -o csv
    fbdata ./facebook-me --skip-missing --timezone Europe/Berlin
    fbdata ./facebook-me friends --monthly")]
pub struct Args {
    /// Path to the unzipped export directory
    pub root: PathBuf,

    /// Content types to extract (default: all)
    #[arg(value_enum)]
    pub content: Vec<Content>,

    /// Directory for CSV files
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,

    /// IANA timezone for timestamps (default: system timezone)
    #[arg(long, value_name = "TZ")]
    pub timezone: Option<String>,

    /// Keep text exactly as stored in the export (no encoding fix)
    #[arg(long)]
    pub raw_text: bool,

    /// Skip content types missing from the export instead of failing
    #[arg(long)]
    pub skip_missing: bool,

    /// Print per-month record counts instead of writing CSV
    #[arg(long)]
    pub monthly: bool,

    /// Show debug logs
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Content types selected on the command line, or all of them.
    pub fn selected(&self) -> Vec<ContentType> {
        if self.content.is_empty() {
            ContentType::all().to_vec()
        } else {
            self.content.iter().map(|&c| c.into()).collect()
        }
    }

    /// Reader configuration built from the flags.
    pub fn reader_config(&self) -> Result<ReaderConfig> {
        let mut config = ReaderConfig::new().with_fix_encoding(!self.raw_text);
        if let Some(ref name) = self.timezone {
            config = config.with_timezone(parse_timezone(name)?);
        }
        Ok(config)
    }

    /// Batch export configuration built from the flags.
    pub fn export_config(&self) -> Result<ExportConfig> {
        Ok(ExportConfig::new()
            .with_reader(self.reader_config()?)
            .with_skip_missing(self.skip_missing))
    }
}

/// Content type as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Content {
    /// friends/friends.json
    Friends,
    /// about_you/your_address_books.json
    #[value(alias = "contacts")]
    AddressBook,
    /// posts/your_posts_1.json
    Posts,
    /// comments/comments.json
    Comments,
    /// likes_and_reactions/posts_and_comments.json
    #[value(alias = "likes")]
    Reactions,
    /// security_and_login_information/account_activity.json
    Sessions,
}

impl From<Content> for ContentType {
    fn from(content: Content) -> Self {
        match content {
            Content::Friends => ContentType::Friends,
            Content::AddressBook => ContentType::AddressBook,
            Content::Posts => ContentType::Posts,
            Content::Comments => ContentType::Comments,
            Content::Reactions => ContentType::Reactions,
            Content::Sessions => ContentType::Sessions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Tz;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("fbdata").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_select_everything() {
        let args = parse(&["./export"]);
        assert_eq!(args.selected(), ContentType::all());
        assert_eq!(args.output, PathBuf::from("output"));
        assert!(!args.skip_missing);
    }

    #[test]
    fn test_content_values() {
        let args = parse(&["./export", "address-book", "likes", "friends"]);
        assert_eq!(
            args.selected(),
            vec![ContentType::AddressBook, ContentType::Reactions, ContentType::Friends]
        );
    }

    #[test]
    fn test_reader_config_flags() {
        let args = parse(&["./export", "--raw-text", "--timezone", "Asia/Tokyo"]);
        let config = args.reader_config().unwrap();
        assert!(!config.fix_encoding);
        assert_eq!(config.timezone, Tz::Asia__Tokyo);
    }

    #[test]
    fn test_bad_timezone() {
        let args = parse(&["./export", "--timezone", "Nowhere/Land"]);
        assert!(args.reader_config().is_err());
    }

    #[test]
    fn test_unknown_content_rejected() {
        assert!(Args::try_parse_from(["fbdata", "./export", "messages"]).is_err());
    }
}
