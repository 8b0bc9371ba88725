use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use bookhive::core::config;
use bookhive::core::route::Route;
use bookhive::tui;

#[derive(Parser)]
#[command(name = "bookhive", about = "Terminal client for a BookHive catalog server")]
struct Args {
    /// Base URL of the catalog API (overrides config file and BOOKHIVE_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Page to open on startup, e.g. "/search?query=dune" or "/book?id=42"
    #[arg(long, default_value = "/")]
    open: String,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to bookhive.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("bookhive.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Could not load config file, using defaults: {e}");
            Default::default()
        }
    };
    let resolved = config::resolve(&file_config, args.api_url.as_deref());
    log::info!("BookHive starting up against {}", resolved.api_base_url);

    tui::run(resolved, Route::parse(&args.open))
}
