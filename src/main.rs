use anyhow::{bail, Context, Result};
use clap::Parser;
use ingame::{
    render::{self, landing},
    session, Dashboard, SheetConfig, SheetLoader,
};
use reqwest::Client;
use std::{env, path::PathBuf};
use tokio::io::{self, BufReader};
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(author, version, about = "InGame.ai company directory")]
struct Args {
    /// YAML file overriding base_url / sheet_id / tab_id
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(short, long, default_value = "")]
    search: String,
    #[arg(short, long, default_value = "")]
    exchange: String,
    #[arg(long, default_value = "")]
    sector: String,
    /// Print the visible records as JSON instead of cards
    #[arg(long)]
    json: bool,
    /// Print the marketing sections around the directory
    #[arg(long)]
    landing: bool,
    /// Read filter commands from stdin and re-render after each
    #[arg(short, long)]
    interactive: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(log_level.parse().unwrap_or(Level::INFO.into())),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // ─── 2) config ───────────────────────────────────────────────────
    let config = match &args.config {
        Some(path) => SheetConfig::from_yaml_file(path)?,
        None => SheetConfig::default(),
    };
    let loader = SheetLoader::new(Client::new(), &config)?;
    info!(url = %loader.url(), "startup");

    if args.landing {
        println!("{}", landing::landing_page());
    }

    // ─── 3) load once ────────────────────────────────────────────────
    let mut dashboard = Dashboard::new();
    eprintln!("{}", render::render(&dashboard));
    dashboard.load(&loader).await;

    dashboard.set_search(args.search);
    dashboard.set_exchange(args.exchange);
    dashboard.set_sector(args.sector);

    // ─── 4) present ──────────────────────────────────────────────────
    if args.interactive && dashboard.error().is_none() {
        session::run(&mut dashboard, BufReader::new(io::stdin()), io::stdout())
            .await
            .context("interactive session")?;
    } else if args.json && dashboard.error().is_none() {
        let visible = dashboard.visible();
        println!("{}", serde_json::to_string_pretty(&visible)?);
    } else {
        println!("{}", render::render(&dashboard));
    }

    if args.landing {
        println!("\n{}", landing::small_cap_section());
    }

    if let Some(msg) = dashboard.error() {
        bail!("{}", msg);
    }
    info!("all done");
    Ok(())
}
