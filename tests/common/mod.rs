//! Fixture export trees shared by the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use chrono::{TimeZone, Utc};
use serde_json::{Value, json};
use tempfile::{TempDir, tempdir};

use fbdata::parsing::to_mojibake;

/// Friends added per month of 2020, January to July.
pub const FRIENDS_PER_MONTH: [(u32, usize); 7] =
    [(1, 3), (2, 2), (3, 2), (4, 3), (5, 8), (6, 18), (7, 3)];

pub fn write_json(root: &Path, rel: &str, value: &Value) {
    write_raw(root, rel, &value.to_string());
}

pub fn write_raw(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// 39 friends spread over January to July 2020.
///
/// Every entry is at noon UTC on day 2 or later, so the month is the same in
/// any timezone.
pub fn friends_2020() -> Value {
    let mut friends = Vec::new();
    for (month, count) in FRIENDS_PER_MONTH {
        for i in 0..count {
            let day = 2 + i as u32;
            let ts = Utc.with_ymd_and_hms(2020, month, day, 12, 0, 0).unwrap();
            friends.push(json!({
                "name": to_mojibake(&format!("Friend {month}-{i}")),
                "timestamp": ts.timestamp(),
            }));
        }
    }
    json!({ "friends": friends })
}

pub fn friends_export() -> TempDir {
    let dir = tempdir().unwrap();
    write_json(dir.path(), "friends/friends.json", &friends_2020());
    dir
}

/// One record per content type, text mangled like a real export.
pub fn minimal_export() -> TempDir {
    let dir = tempdir().unwrap();
    let root = dir.path();

    write_json(
        root,
        "friends/friends.json",
        &json!({"friends": [{"name": to_mojibake("Jürgen Groß"), "timestamp": 1582964988}]}),
    );
    write_json(
        root,
        "about_you/your_address_books.json",
        &json!({"address_book": {"address_book": [
            {"name": to_mojibake("Мама"), "details": [{"contact_point": "+15550100"}], "created_timestamp": 1582964988}
        ]}}),
    );
    write_json(
        root,
        "posts/your_posts_1.json",
        &json!([{"timestamp": 1582964988, "data": [{"post": to_mojibake("Привет, мир!")}]}]),
    );
    write_json(
        root,
        "comments/comments.json",
        &json!({"comments": [{
            "timestamp": 1582964988,
            "data": [{"comment": {"timestamp": 1582964988, "comment": to_mojibake("Très bien"), "author": "Me"}}],
            "title": "Me commented on a post."
        }]}),
    );
    write_json(
        root,
        "likes_and_reactions/posts_and_comments.json",
        &json!({"reactions": [{
            "timestamp": 1582964988,
            "data": [{"reaction": {"reaction": "LOVE", "actor": "Me"}}],
            "title": to_mojibake("Me loves Zoë's post.")
        }]}),
    );
    write_json(
        root,
        "security_and_login_information/account_activity.json",
        &json!({"account_activity": [{
            "action": "Login",
            "timestamp": 1582964988,
            "ip_address": "203.0.113.7",
            "city": to_mojibake("München"),
            "region": "Bayern",
            "country": "DE"
        }]}),
    );

    dir
}
