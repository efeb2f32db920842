//! Synthetic export generator for benchmarking and manual testing.
//!
//! Writes a full export tree with every content type, text mangled the way
//! Meta mangles it.
//!
//! Usage: cargo run --features gen-test --bin gen_export -- [records] [output_dir]
//! Example: cargo run --features gen-test --bin gen_export -- 100000 ./fake-export

use std::env;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;
use serde_json::{Value, json};

use fbdata::ContentType;
use fbdata::parsing::to_mojibake;

const NAMES: &[&str] = &[
    "Alice",
    "Bob",
    "Jürgen Groß",
    "Иван Петров",
    "Мария",
    "村上春樹",
    "محمد",
    "Zoë O'Brien",
    "Name, With Comma",
    "\"Quoted\" Name",
    "🔥FireUser🔥",
];

const TEXTS: &[&str] = &[
    "Hello world",
    "Привет мир!",
    "Ça va? Très bien.",
    "Line one\nline two",
    "a, b, c",
    "She said \"hi\"",
    "🎉🔥💀 emoji",
    "",
];

const REACTIONS: &[&str] = &["LIKE", "LOVE", "HAHA", "WOW", "SORRY", "ANGER"];

const PLACES: &[(&str, &str, &str)] = &[
    ("Berlin", "Berlin", "DE"),
    ("München", "Bayern", "DE"),
    ("Москва", "Москва", "RU"),
    ("São Paulo", "São Paulo", "BR"),
    ("Minneapolis", "Minnesota", "US"),
];

// 2020-01-01T00:00:00Z
const START_EPOCH: i64 = 1577836800;

fn main() {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(10_000);
    let output = args.get(2).map(|s| s.as_str()).unwrap_or("fake-export");

    println!("🧪 Export Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Records: {} per content type", count);
    println!("   Output:  {}", output);
    println!();

    let start = std::time::Instant::now();
    let mut rng = rand::thread_rng();
    let root = Path::new(output);

    for &content in ContentType::all() {
        let records: Vec<Value> = (0..count)
            .map(|i| generate_record(&mut rng, content, i))
            .collect();
        let document = wrap(content, records);

        let path = content.descriptor().file_path(root);
        fs::create_dir_all(path.parent().expect("descriptor path has a parent"))
            .expect("Failed to create output directory");
        let file = File::create(&path).expect("Failed to create output file");
        serde_json::to_writer(BufWriter::with_capacity(1024 * 1024, file), &document)
            .expect("Failed to write JSON");

        println!("   ✅ {}", path.display());
    }

    println!();
    println!("Done in {:.2}s", start.elapsed().as_secs_f64());
}

fn wrap(content: ContentType, records: Vec<Value>) -> Value {
    let mut document = Value::Array(records);
    for key in content.descriptor().unwrap.iter().rev() {
        let mut map = serde_json::Map::new();
        map.insert((*key).to_string(), document);
        document = Value::Object(map);
    }
    document
}

fn pick(rng: &mut impl Rng, items: &[&str]) -> String {
    to_mojibake(items.choose(rng).copied().unwrap_or_default())
}

fn generate_record(rng: &mut impl Rng, content: ContentType, index: usize) -> Value {
    let timestamp = START_EPOCH + (index as i64) * 3600 + rng.gen_range(0..3600);

    match content {
        ContentType::Friends => json!({"name": pick(rng, NAMES), "timestamp": timestamp}),
        ContentType::AddressBook => {
            let details = if index % 5 == 0 {
                json!([])
            } else {
                json!([{"contact_point": format!("+1555{:07}", index)}])
            };
            json!({"name": pick(rng, NAMES), "details": details, "created_timestamp": timestamp})
        }
        ContentType::Posts => {
            if index % 7 == 0 {
                json!({"timestamp": timestamp, "attachments": []})
            } else {
                json!({"timestamp": timestamp, "data": [{"post": pick(rng, TEXTS)}]})
            }
        }
        ContentType::Comments => json!({
            "timestamp": timestamp,
            "data": [{"comment": {"timestamp": timestamp, "comment": pick(rng, TEXTS), "author": pick(rng, NAMES)}}],
            "title": to_mojibake("Alice commented on a post."),
        }),
        ContentType::Reactions => json!({
            "timestamp": timestamp,
            "data": [{"reaction": {"reaction": REACTIONS.choose(rng).copied().unwrap_or("LIKE"), "actor": pick(rng, NAMES)}}],
            "title": format!("{} likes a post.", pick(rng, NAMES)),
        }),
        ContentType::Sessions => {
            let (city, region, country) = PLACES.choose(rng).copied().unwrap_or(PLACES[0]);
            json!({
                "action": "Login",
                "timestamp": timestamp,
                "ip_address": format!("203.0.113.{}", index % 256),
                "city": to_mojibake(city),
                "region": to_mojibake(region),
                "country": country,
            })
        }
    }
}
