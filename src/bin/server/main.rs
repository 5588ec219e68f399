use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wellness_portfolio::{
    adapters::inbound::http::router::create_router,
    app::{AppBuilder, AppConfig, ContactBackend, ContentSource, RepositoryBackend},
};

#[derive(Parser, Debug)]
#[command(name = "portfolio-server")]
#[command(about = "Serves the wellness portfolio page and its contact API", long_about = None)]
struct Cli {
    /// Server port to listen on
    #[arg(short, long, env = "SERVER_PORT", default_value = "8001")]
    port: u16,

    /// Server host to bind to
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Content source: static or remote
    #[arg(long, env = "CONTENT_SOURCE", default_value = "static")]
    content_source: String,

    /// Base address of the backend for remote content or contact delivery
    #[arg(long, env = "BACKEND_URL")]
    backend_url: Option<String>,

    /// Contact backend: simulated, remote or local
    #[arg(long, env = "CONTACT_BACKEND", default_value = "simulated")]
    contact_backend: String,

    /// Delay of the simulated contact backend, in milliseconds
    #[arg(long, env = "SUBMIT_DELAY_MS", default_value = "1500")]
    submit_delay_ms: u64,

    /// Repository backend type
    #[arg(long, env = "REPOSITORY_BACKEND", default_value = "memory")]
    repository_backend: String,

    /// Database URL for repository backend (SQLite)
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    fn to_app_config(&self) -> Result<AppConfig> {
        let content_source =
            ContentSource::parse(&self.content_source, self.backend_url.clone())?;
        let contact_backend = ContactBackend::parse(
            &self.contact_backend,
            self.backend_url.clone(),
            self.submit_delay_ms,
        )?;
        let repository_backend =
            RepositoryBackend::parse(&self.repository_backend, self.database_url.clone())?;

        Ok(AppConfig {
            content_source,
            contact_backend,
            repository_backend,
        })
    }

    fn env_filter(&self) -> EnvFilter {
        let level = match self.log_level.to_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "warn" => "warn",
            "error" => "error",
            _ => "info",
        };

        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("wellness_portfolio={level},tower_http={level},{level}"))
        })
    }

    fn init_logging(&self) {
        tracing_subscriber::registry()
            .with(self.env_filter())
            .with(tracing_subscriber::fmt::layer().with_target(false).compact())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    cli.init_logging();

    info!("Starting portfolio server");
    info!("Content source: {}", cli.content_source);
    info!("Contact backend: {}", cli.contact_backend);
    info!("Repository backend: {}", cli.repository_backend);

    let config = cli.to_app_config()?;

    let app_services = AppBuilder::new()
        .with_config(config)
        .build()
        .await
        .context("Failed to build application")?;

    let router = create_router(app_services.state());

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
        .parse()
        .context("Invalid listen address")?;
    let listener = TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, router)
        .await
        .context("Failed to start server")?;

    Ok(())
}
