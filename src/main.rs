//! PhishGuard Core - Command Line Entry Point
//!
//! Thin glue around the engine: load artifacts, scan one input, print JSON.
//! The decision engine itself lives in the library; any HTTP transport is an
//! upstream concern.

use phishguard_core::{constants, EngineConfig, ScanEngine};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting {} core v{}...", constants::APP_NAME, constants::APP_VERSION);

    let engine = ScanEngine::from_config(&EngineConfig::default());
    let status = engine.status();
    log::info!(
        "Artifacts: url_model={} email_model={} vectorizer={}",
        status.url_model_loaded,
        status.email_model_loaded,
        status.vectorizer_loaded
    );

    let mut args = std::env::args().skip(1);
    let mode = args.next().unwrap_or_default();
    let input = args.collect::<Vec<_>>().join(" ");

    let result = match mode.as_str() {
        "url" => engine.scan_url(&input),
        "email" => engine.scan_email(&input),
        _ => {
            eprintln!("usage: phishguard-core <url|email> <input>");
            std::process::exit(2);
        }
    };

    println!("{}", serde_json::to_string(&result).unwrap_or_default());
}
