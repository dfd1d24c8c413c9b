use anyhow::{Context, Result};
use clap::Parser;
use mock_interview::{create_app, AppState, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "mock-interview", about = "Mock interview session and evaluation server")]
struct Args {
    /// Config file path (extension optional)
    #[arg(short, long, default_value = "config/mock-interview")]
    config: String,

    /// Override the configured HTTP port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let cfg = Config::load(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Mock Interview v{}", env!("CARGO_PKG_VERSION"));
    info!("Loaded config: {}", cfg.service.name);
    info!("LLM provider: {}", cfg.llm.provider);
    if cfg.livekit.is_none() {
        info!("No [livekit] section, room credentials disabled");
    }

    let state = AppState::from_config(&cfg)?;
    let app = create_app(
        state,
        &cfg.service.http.base_path,
        &cfg.service.http.cors_origins,
    );

    let port = args.port.unwrap_or(cfg.service.http.port);
    let addr = format!("{}:{}", cfg.service.http.bind, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(
        "HTTP server listening on {} (routes under {})",
        addr, cfg.service.http.base_path
    );
    axum::serve(listener, app).await?;

    Ok(())
}
