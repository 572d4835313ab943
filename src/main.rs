//! PicSearch: image search with spelling-corrected suggestions
//!
//! Usage:
//!   picsearch                   - Open the search window
//!   picsearch search <phrase>   - Correct and search from the terminal
//!   picsearch correct <phrase>  - Show spelling candidates only
//!   picsearch config            - Show the effective configuration
//!   picsearch help              - Show help

mod app;
mod backend;
mod config;
mod controller;
mod error;
mod ui;

use std::env;
use std::sync::Arc;

use app::PicSearch;
use backend::images::{ImageSource, PixabayClient};
use backend::spell::{DatamuseClient, SpellCorrector};
use config::Config;
use controller::{Outcome, SearchController};
use iced::{window, Size};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> iced::Result {
    init_logging();

    // Parse CLI arguments
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 {
        return handle_cli_command(&args[1], &args[2..]);
    }

    start_gui(load_config())
}

fn load_config() -> Config {
    match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging() {
    // try_init so a second call (tests, embedding) does not panic
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn services(config: &Config) -> error::Result<(Arc<dyn SpellCorrector>, Arc<dyn ImageSource>)> {
    let client = backend::http_client(config)?;
    let speller: Arc<dyn SpellCorrector> = Arc::new(DatamuseClient::new(client.clone(), config));
    let source: Arc<dyn ImageSource> = Arc::new(PixabayClient::new(client, config));
    Ok((speller, source))
}

fn handle_cli_command(cmd: &str, rest: &[String]) -> iced::Result {
    if is_help(cmd) {
        print_help();
        return Ok(());
    }

    let config = load_config();
    let phrase = rest.join(" ");

    match cmd {
        "search" | "s" => {
            run_blocking(&config, |speller, source| async move {
                headless_search(speller.as_ref(), source.as_ref(), &phrase).await
            });
            Ok(())
        }
        "correct" | "c" => {
            run_blocking(&config, |speller, _source| async move {
                match speller.correct(&phrase).await {
                    Ok(candidates) => {
                        for (i, word) in candidates.iter().enumerate() {
                            println!("{}{}", if i == 0 { "* " } else { "  " }, word);
                        }
                    }
                    Err(e) => eprintln!("Error: {}", e),
                }
            });
            Ok(())
        }
        "config" => {
            match Config::path() {
                Some(path) => println!("Config file: {}", path.display()),
                None => println!("Config file: (no config directory on this platform)"),
            }
            match serde_json::to_string_pretty(&redacted(&config)) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Error: {}", e),
            }
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", cmd);
            eprintln!("Run 'picsearch help' for usage");
            Ok(())
        }
    }
}

/// Help must work even when the config file is broken
fn is_help(cmd: &str) -> bool {
    matches!(cmd, "help" | "--help" | "-h")
}

fn print_help() {
    println!("PicSearch - image search with spelling suggestions\n");
    println!("Usage: picsearch [command]\n");
    println!("Commands:");
    println!("  (none)            Open the search window");
    println!("  search <phrase>   Correct the phrase and list matching images");
    println!("  correct <phrase>  Show spelling candidates");
    println!("  config            Show config file path and settings");
    println!("  help              Show this help message");
    println!("\nSet PIXABAY_API_KEY or add \"pixabay_key\" to the config file.");
}

fn run_blocking<F, Fut>(config: &Config, job: F)
where
    F: FnOnce(Arc<dyn SpellCorrector>, Arc<dyn ImageSource>) -> Fut,
    Fut: std::future::Future<Output = ()>,
{
    let (speller, source) = match services(config) {
        Ok(services) => services,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    match tokio::runtime::Runtime::new() {
        Ok(rt) => rt.block_on(job(speller, source)),
        Err(e) => eprintln!("Error: failed to create tokio runtime: {}", e),
    }
}

/// Drive the same controller the window uses, printing instead of rendering
async fn headless_search(speller: &dyn SpellCorrector, source: &dyn ImageSource, phrase: &str) {
    let mut controller = SearchController::new();
    controller.set_input(phrase);

    let request = controller.submit();
    let result = speller.correct(&request.text).await;
    let fetch = controller.correction_finished(request.ticket, result);

    let Some(fetch) = fetch else {
        eprintln!("Error: {}", controller.notice().unwrap_or(error::NOTICE));
        return;
    };

    if !controller.corrected_query().is_empty() {
        println!("Show results of {}", controller.corrected_query());
    }
    if !controller.suggestions().is_empty() {
        println!("Did you mean: {}", controller.suggestions().join(", "));
    }

    let result = source.search(&fetch.word).await;
    match controller.images_finished(fetch.ticket, result) {
        Outcome::Applied => {
            for hit in controller.images() {
                println!("{:>10}  {:<40}  {}", hit.id, hit.tags, hit.page_url);
            }
            println!("{} images", controller.images().len());
        }
        Outcome::Failed | Outcome::Stale => {
            eprintln!("Error: {}", controller.notice().unwrap_or(error::NOTICE));
        }
    }
}

fn redacted(config: &Config) -> Config {
    Config {
        pixabay_key: config.pixabay_key.as_ref().map(|_| "********".to_string()),
        ..config.clone()
    }
}

fn start_gui(config: Config) -> iced::Result {
    tracing::info!("Starting PicSearch...");

    let (speller, source) = match services(&config) {
        Ok(services) => services,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if config.pixabay_key.is_none() {
        tracing::warn!("No Pixabay API key configured; image searches will fail");
    }

    let columns = config.grid_columns;

    iced::application(PicSearch::title, PicSearch::update, PicSearch::view)
        .subscription(PicSearch::subscription)
        .theme(PicSearch::theme)
        .window(window::Settings {
            size: Size::new(760.0, 720.0),
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || PicSearch::new(speller, source, columns))
}
