//! Linkstash: prints the bookmark collection.
//!
//! Usage:
//!   `linkstash [--json] [filter]`
//!   `linkstash config [show | path | reset | set <key> <value>]`
//!
//! Without a filter every bookmark is listed, newest first, followed by the
//! hashtag cloud. `--json` prints the same data as one JSON document.
//! `config set` takes a dot-separated key such as `fetch.timeout_secs`; the
//! value is parsed as JSON and falls back to a plain string.

use linkstash::app::App;
use linkstash::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use linkstash::types::bookmark::Collection;
use linkstash::types::errors::SettingsError;
use tracing::error;

fn main() {
    linkstash::logging::init_with_default("warn");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--version") {
        println!("linkstash {}", env!("CARGO_PKG_VERSION"));
        return;
    }
    if args.first().map(String::as_str) == Some("config") {
        if let Err(e) = run_config(&args[1..]) {
            error!(error = %e, "config command failed");
            std::process::exit(1);
        }
        return;
    }

    let as_json = args.iter().any(|a| a == "--json");
    let filter = args
        .iter()
        .filter(|a| !a.starts_with("--"))
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");

    let app = match App::new(None) {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "failed to initialise linkstash");
            std::process::exit(1);
        }
    };

    let collection = match app.collection(&filter) {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "failed to list bookmarks");
            std::process::exit(1);
        }
    };

    if as_json {
        match serde_json::to_string_pretty(&collection) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!(error = %e, "failed to serialize collection");
                std::process::exit(1);
            }
        }
    } else {
        print_collection(&collection);
    }
}

fn run_config(args: &[String]) -> Result<(), SettingsError> {
    let mut engine = SettingsEngine::new(None);
    engine.load()?;

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [] | ["show"] => {
            let json = serde_json::to_string_pretty(engine.get_settings())
                .map_err(|e| SettingsError::SerializationError(e.to_string()))?;
            println!("{}", json);
        }
        ["path"] => {
            println!("config:   {}", engine.get_config_path());
            println!("database: {}", engine.database_path().display());
        }
        ["reset"] => engine.reset()?,
        ["set", key, value] => {
            let value = serde_json::from_str(value)
                .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
            engine.set_value(key, value)?;
        }
        other => {
            return Err(SettingsError::InvalidKey(format!(
                "unknown config command: {}",
                other.join(" ")
            )))
        }
    }
    Ok(())
}

fn print_collection(collection: &Collection) {
    if !collection.filter.is_empty() {
        println!("filter: {}", collection.filter);
        println!();
    }

    for entry in &collection.entries {
        let tags: Vec<&str> = entry
            .formatted
            .tags
            .iter()
            .map(|t| t.tag.as_str())
            .collect();
        println!(
            "[{}] {}  {}",
            entry.bookmark.id, entry.bookmark.created_at, entry.bookmark.title
        );
        println!("      {}", entry.bookmark.link);
        if !tags.is_empty() {
            println!("      {}", tags.join(" "));
        }
    }
    println!("{} bookmark(s)", collection.entries.len());

    if !collection.hashtags.is_empty() {
        println!();
        let cloud: Vec<String> = collection
            .hashtags
            .iter()
            .map(|t| format!("{} ({})", t.tag, t.count))
            .collect();
        println!("hashtags: {}", cloud.join("  "));
    }
}
