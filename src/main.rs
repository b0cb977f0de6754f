use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use log::{info, log, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use podshelf::core::config::{self, CliOverrides, ResolvedConfig};
use podshelf::core::genres::GenreCatalog;
use podshelf::tui;

#[derive(Parser)]
#[command(name = "podshelf", about = "Browse a podcast directory from the terminal")]
struct Args {
    /// Podcast listing endpoint (JSON array of previews)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Genre catalog JSON file, replacing the bundled one
    #[arg(short, long)]
    genres: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config decides where logs go, so its own notices are held until then
    let mut notices = Vec::new();
    let file_config = config::load_config(&mut notices);
    let resolved = config::resolve(
        file_config.as_ref().unwrap_or(&Default::default()),
        &CliOverrides {
            endpoint: args.endpoint,
            genre_catalog: args.genres,
        },
        &mut notices,
    );

    init_logging(&resolved);
    for notice in &notices {
        log!(notice.level, "{}", notice.message);
    }
    if let Err(e) = &file_config {
        warn!("Ignoring unreadable config file: {}", e);
    }

    info!(
        "Podshelf starting up: endpoint={}, page_size={}",
        resolved.endpoint, resolved.page_size
    );

    let catalog = Arc::new(load_catalog(&resolved));
    tui::run(resolved, catalog)
}

/// Initialize file logger. The terminal belongs to the UI.
fn init_logging(config: &ResolvedConfig) {
    let level = config
        .log_level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::Debug);

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}

fn load_catalog(config: &ResolvedConfig) -> GenreCatalog {
    let Some(path) = &config.genre_catalog else {
        return GenreCatalog::bundled();
    };
    match GenreCatalog::from_path(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            warn!(
                "Failed to load genre catalog {}: {}. Using bundled catalog",
                path.display(),
                e
            );
            GenreCatalog::bundled()
        }
    }
}
