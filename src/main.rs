use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use portfolio::core::commands::Variant;
use portfolio::core::config::{CliOverrides, PortfolioConfig, load_config, resolve};
use portfolio::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "portfolio", about = "Terminal portfolio with a built-in snake game")]
struct Args {
    /// Site variant to show
    #[arg(short, long, value_enum)]
    variant: Option<Variant>,

    /// Start directly on the page, without the cover
    #[arg(long)]
    skip_cover: bool,

    /// Start with game sound muted
    #[arg(long)]
    mute: bool,

    /// Config file to read instead of ~/.portfolio/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to portfolio.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("portfolio.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{}; using defaults", e);
            PortfolioConfig::default()
        }
    };
    let cli = CliOverrides {
        variant: args.variant,
        skip_cover: args.skip_cover,
        mute: args.mute,
    };
    let config = resolve(&file_config, &cli);

    log::info!("Portfolio starting up with variant: {}", config.variant.label());

    tui::run(config).await
}
