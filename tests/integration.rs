//! Integration tests over fixture export trees.

mod common;

use chrono_tz::Tz;
use fbdata::core::summary::{YearMonth, monthly_counts};
use fbdata::prelude::*;
use std::fs;
use tempfile::tempdir;

use common::{FRIENDS_PER_MONTH, friends_export, minimal_export};

fn utc_reader(content: ContentType, root: &std::path::Path) -> Reader {
    Reader::with_config(content, root, ReaderConfig::utc())
}

// =========================================================================
// Friends end-to-end
// =========================================================================

#[test]
fn test_get_friends_monthly_distribution() {
    let export = friends_export();
    let friends = get_friends(export.path()).expect("extraction failed");
    assert_eq!(friends.len(), 39);

    let counts = monthly_counts(&friends);
    let expected: Vec<(YearMonth, usize)> = FRIENDS_PER_MONTH
        .iter()
        .map(|&(month, count)| (YearMonth::new(2020, month), count))
        .collect();
    assert_eq!(counts.into_iter().collect::<Vec<_>>(), expected);
}

#[test]
fn test_friend_names_are_fixed() {
    let export = friends_export();
    let friends = utc_reader(ContentType::Friends, export.path()).to_list().unwrap();
    assert_eq!(friends[0].get("name").unwrap().as_text(), Some("Friend 1-0"));
}

// =========================================================================
// Every descriptor
// =========================================================================

#[test]
fn test_arity_matches_columns_for_every_descriptor() {
    let export = minimal_export();
    for descriptor in &DESCRIPTORS {
        let reader = Reader::from_descriptor(descriptor, export.path(), ReaderConfig::utc());
        let records = reader.to_list().unwrap();
        assert_eq!(records.len(), 1, "{}", descriptor.content_type);
        for record in &records {
            assert_eq!(record.len(), descriptor.columns.len());
            assert_eq!(record.columns(), descriptor.columns);
        }
    }
}

#[test]
fn test_mapping_keys_are_columns_in_order() {
    let export = minimal_export();
    for &content in ContentType::all() {
        let mappings = utc_reader(content, export.path()).to_mappings().unwrap();
        let keys: Vec<&str> = mappings[0].keys().collect();
        assert_eq!(keys, content.descriptor().columns);
    }
}

#[test]
fn test_views_agree_on_count() {
    let export = friends_export();
    let reader = utc_reader(ContentType::Friends, export.path());
    let lazy = reader.produce().unwrap().count();
    assert_eq!(lazy, reader.to_list().unwrap().len());
    assert_eq!(lazy, reader.to_mappings().unwrap().len());
    assert_eq!(lazy, reader.to_table().unwrap().len());
}

#[test]
fn test_api_functions() {
    let export = minimal_export();
    let root = export.path();

    let friends = get_friends(root).unwrap();
    assert_eq!(friends[0][1], Field::from("Jürgen Groß"));

    let contacts = get_address_book(root).unwrap();
    assert_eq!(contacts[0][0], Field::from("Мама"));
    assert_eq!(contacts[0][1], Field::from("+15550100"));

    let posts = get_posts(root).unwrap();
    assert_eq!(posts[0][1], Field::from("Привет, мир!"));

    let comments = get_comments(root).unwrap();
    assert_eq!(comments[0][1], Field::from("Très bien"));

    let reactions = get_reactions(root).unwrap();
    assert_eq!(reactions[0][1], Field::from("LOVE"));
    assert_eq!(reactions[0][2], Field::from("Me loves Zoë's post."));

    let sessions = get_sessions(root).unwrap();
    assert_eq!(sessions[0].get("city").unwrap().as_text(), Some("München"));
    assert_eq!(sessions[0].get("country").unwrap().as_text(), Some("DE"));
}

#[test]
fn test_api_matches_reader() {
    let export = minimal_export();
    let via_api = get_posts(export.path()).unwrap();
    let via_reader = Reader::new(ContentType::Posts, export.path()).to_list().unwrap();
    assert_eq!(via_api, via_reader);
}

// =========================================================================
// Timestamps
// =========================================================================

#[test]
fn test_timestamps_keep_epoch_and_calendar_value() {
    let export = minimal_export();
    let posts = utc_reader(ContentType::Posts, export.path()).to_list().unwrap();
    let ts = posts[0].timestamp().unwrap();
    assert_eq!(ts.epoch(), 1582964988);
    assert_eq!(ts.to_string(), "2020-02-29 08:29:48");
}

#[test]
fn test_timezone_applies_to_every_view() {
    let export = minimal_export();
    let config = ReaderConfig::utc().with_timezone(Tz::Asia__Tokyo);
    let reader = Reader::with_config(ContentType::Posts, export.path(), config);

    let record = &reader.to_list().unwrap()[0];
    assert_eq!(record[0].to_string(), "2020-02-29 17:29:48");

    let table = reader.to_table().unwrap();
    assert_eq!(table.column("timestamp").unwrap().values()[0].to_string(), "2020-02-29 17:29:48");
}

#[test]
fn test_table_timestamp_column_is_converted() {
    let export = minimal_export();
    let table = utc_reader(ContentType::Sessions, export.path()).to_table().unwrap();
    let ts = table.column("timestamp").unwrap().values()[0].as_timestamp().unwrap();
    assert_eq!(ts.to_string(), "2020-02-29 08:29:48");
}

// =========================================================================
// CSV
// =========================================================================

#[test]
fn test_save_csv_round_trip() {
    let export = friends_export();
    let out = tempdir().unwrap();
    let reader = utc_reader(ContentType::Friends, export.path());

    let table = reader.to_table().unwrap();
    let path = reader.save_csv(out.path()).unwrap();
    assert_eq!(path, out.path().join("friends.csv"));

    let mut csv_reader = csv::Reader::from_path(&path).unwrap();
    let headers: Vec<String> = csv_reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, table.header());

    let rows: Vec<csv::StringRecord> = csv_reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), table.len());

    let timestamps = table.column("timestamp").unwrap().values();
    for (row, ts) in rows.iter().zip(timestamps) {
        assert_eq!(&row[0], ts.to_string());
    }
}

#[test]
fn test_save_all_minimal_export() {
    let export = minimal_export();
    let out = tempdir().unwrap();

    let paths = save_all(export.path(), out.path()).unwrap();
    assert_eq!(paths.len(), 6);

    for (path, content) in paths.iter().zip(ContentType::all()) {
        assert_eq!(path, &out.path().join(format!("{content}.csv")));
        assert!(path.exists());
        assert!(fs::metadata(path).unwrap().len() > 0);
    }
}

#[test]
fn test_save_all_creates_output_dir() {
    let export = minimal_export();
    let out = tempdir().unwrap();
    let nested = out.path().join("a").join("b");

    let paths = save_all(export.path(), &nested).unwrap();
    assert!(paths.iter().all(|p| p.starts_with(&nested)));
}
