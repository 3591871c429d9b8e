#![forbid(unsafe_code)]

mod config;
mod constants;
mod contact;
mod content;
mod gui;
mod i18n;
mod presenter;
mod showcase;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use config::Config;
use content::ContentRepository;
use i18n::{Language, Resources, Translator};

/// Bilingual portfolio showcase: projects, case studies and skills
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Display language (overrides config and environment)
    #[arg(long, value_enum)]
    lang: Option<Language>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error (overrides LOG_LEVEL)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the resolved content as JSON and exit
    #[arg(long)]
    dump: bool,
}

fn parse_level(value: &str) -> TraceLevel {
    match value.to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    }
}

/// Resolved content as pretty JSON (the `--dump` output)
fn dump_json(translator: &Translator) -> Result<String> {
    let content = ContentRepository::load(translator)?;
    serde_json::to_string_pretty(&content).context("Failed to serialize content")
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config_path = args.config.clone().unwrap_or_else(Config::default_path);

    // Priority: --log-level > LOG_LEVEL > config file > info
    let log_level = args
        .log_level
        .clone()
        .or_else(|| std::env::var("LOG_LEVEL").ok())
        .or_else(|| Config::peek_log_level(&config_path))
        .unwrap_or_else(|| "info".to_string());

    // stdout is reserved for --dump
    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_level(&log_level))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;

    info!(path = %config_path.display(), level = %log_level, "Starting portfolio showcase");
    let config = Config::load_from(&config_path)?;

    let language = Language::detect(args.lang, config.language);
    let resources = Arc::new(Resources::embedded()?);
    let translator = Translator::new(language, resources);
    info!(%language, "Resolved display language");

    if args.dump {
        println!("{}", dump_json(&translator)?);
        return Ok(());
    }

    gui::run_gui(config, config_path, translator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_defaults_to_info() {
        assert_eq!(parse_level("DEBUG"), TraceLevel::DEBUG);
        assert_eq!(parse_level("warn"), TraceLevel::WARN);
        assert_eq!(parse_level("verbose"), TraceLevel::INFO);
    }

    #[test]
    fn test_dump_output_is_json() {
        let resources = Arc::new(Resources::embedded().unwrap());
        for language in Language::ALL {
            let json = dump_json(&Translator::new(language, Arc::clone(&resources))).unwrap();
            let value: serde_json::Value = serde_json::from_str(&json).unwrap();
            assert_eq!(value["projects"][0]["id"], "bwsc25");
            assert!(value["technical"].as_array().is_some_and(|skills| !skills.is_empty()));
        }
    }

    #[test]
    fn test_args_parse_language_and_dump() {
        let args = Args::try_parse_from(["portfolio-showcase", "--lang", "es", "--dump"]).unwrap();
        assert_eq!(args.lang, Some(Language::Es));
        assert!(args.dump);
        assert!(args.config.is_none());
    }
}
