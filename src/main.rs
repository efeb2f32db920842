//! # fbdata CLI
//!
//! Command-line interface for the fbdata library.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use fbdata::cli::Args;
use fbdata::config::ReaderConfig;
use fbdata::core::summary::monthly_counts;
use fbdata::export::{save_all_with_config, save_selected};
use fbdata::{FbDataError, Reader};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "fbdata=debug" } else { "fbdata=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), FbDataError> {
    let total_start = Instant::now();
    let reader_config = args.reader_config()?;

    println!("📦 fbdata v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Export:   {}", args.root.display());
    println!("🕒 Timezone: {}", reader_config.timezone);
    if !args.monthly {
        println!("💾 Output:   {}", args.output.display());
    }
    println!();

    if args.monthly {
        return print_monthly(args, &reader_config);
    }

    let export_config = args.export_config()?;
    let written: Vec<PathBuf> = if args.content.is_empty() {
        println!("⏳ Exporting all content types...");
        save_all_with_config(&args.root, &args.output, &export_config)?
    } else {
        let selected = args.selected();
        let names: Vec<&str> = selected.iter().map(|c| c.name()).collect();
        println!("⏳ Exporting {}...", names.join(", "));
        save_selected(&args.root, &args.output, &selected, &export_config)?
    };

    println!();
    for path in &written {
        println!("   ✅ {}", path.display());
    }
    println!();
    println!(
        "Done! {} file(s) written in {:.2}s",
        written.len(),
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn print_monthly(args: &Args, reader_config: &ReaderConfig) -> Result<(), FbDataError> {
    for content in args.selected() {
        if !content.descriptor().has_timestamp() {
            println!("📊 {} has no timestamps, skipped", content);
            println!();
            continue;
        }

        let reader = Reader::with_config(content, &args.root, reader_config.clone());
        let records = match reader.to_list() {
            Ok(records) => records,
            Err(e) if args.skip_missing && e.is_not_found() => {
                warn!(content = %content, error = %e, "skipping content type missing from export");
                continue;
            }
            Err(e) => return Err(e),
        };

        println!("📊 {} ({} records)", content, records.len());
        for (month, count) in monthly_counts(&records) {
            println!("   {}  {:>5}", month, count);
        }
        println!();
    }
    Ok(())
}
