use std::{sync::Arc, time::Duration};
use tracing::info;

use crate::{
    adapters::{
        inbound::http::router::AppState,
        outbound::{
            contact::{
                DEFAULT_SUBMIT_DELAY, HttpContactGateway, ServiceContactGateway,
                SimulatedContactGateway,
            },
            content::{RemoteContentProvider, StaticContentProvider},
            persistence::{InMemoryContactRepository, SqlContactRepository},
        },
    },
    ports::{
        contact::ContactGateway, content::ContentProvider, repositories::ContactRepository,
        services::PortfolioService,
    },
    services::{ContactServiceImpl, PortfolioServiceImpl},
};

/// Configuration for the application
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub content_source: ContentSource,
    pub contact_backend: ContactBackend,
    pub repository_backend: RepositoryBackend,
}

/// Where the portfolio content comes from
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ContentSource {
    /// The content bundled into the binary
    #[default]
    Static,
    /// `GET {base_url}/api/portfolio`
    Remote { base_url: String },
}

/// Where the contact form delivers submissions
#[derive(Debug, Clone, PartialEq)]
pub enum ContactBackend {
    Simulated { delay: Duration },
    Remote { base_url: String },
    /// Stored through this process's own contact service
    Local,
}

impl Default for ContactBackend {
    fn default() -> Self {
        ContactBackend::Simulated {
            delay: DEFAULT_SUBMIT_DELAY,
        }
    }
}

/// Repository backend configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RepositoryBackend {
    #[default]
    InMemory,
    Database { connection_string: String },
}

impl ContentSource {
    pub fn parse(kind: &str, base_url: Option<String>) -> Result<Self, AppError> {
        match kind {
            "static" => Ok(ContentSource::Static),
            "remote" => Ok(ContentSource::Remote {
                base_url: require(base_url, "BACKEND_URL is required for remote content")?,
            }),
            other => Err(AppError::configuration(format!(
                "Unknown content source: {}",
                other
            ))),
        }
    }
}

impl ContactBackend {
    pub fn parse(kind: &str, base_url: Option<String>, delay_ms: u64) -> Result<Self, AppError> {
        match kind {
            "simulated" => Ok(ContactBackend::Simulated {
                delay: Duration::from_millis(delay_ms),
            }),
            "remote" => Ok(ContactBackend::Remote {
                base_url: require(base_url, "BACKEND_URL is required for the remote contact backend")?,
            }),
            "local" => Ok(ContactBackend::Local),
            other => Err(AppError::configuration(format!(
                "Unknown contact backend: {}",
                other
            ))),
        }
    }
}

impl RepositoryBackend {
    pub fn parse(kind: &str, database_url: Option<String>) -> Result<Self, AppError> {
        match kind {
            "memory" => Ok(RepositoryBackend::InMemory),
            "database" | "db" => Ok(RepositoryBackend::Database {
                connection_string: require(
                    database_url,
                    "DATABASE_URL is required for database backend",
                )?,
            }),
            other => Err(AppError::configuration(format!(
                "Unknown repository backend: {}",
                other
            ))),
        }
    }
}

fn require(value: Option<String>, message: &str) -> Result<String, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::configuration(message))
}

/// Application dependencies container
pub struct AppDependencies {
    pub content_provider: Arc<dyn ContentProvider>,
    pub contact_repository: Arc<dyn ContactRepository>,
}

/// Application services container
pub struct AppServices {
    pub portfolio_service: Arc<PortfolioServiceImpl>,
    pub contact_service: Arc<ContactServiceImpl>,
    pub contact_gateway: Arc<dyn ContactGateway>,
}

impl AppServices {
    /// Router state sharing these services
    pub fn state(&self) -> AppState {
        AppState {
            portfolio_service: self.portfolio_service.clone(),
            contact_service: self.contact_service.clone(),
            contact_gateway: self.contact_gateway.clone(),
        }
    }
}

/// Application builder for dependency injection
pub struct AppBuilder {
    config: AppConfig,
}

impl AppBuilder {
    /// Create a new application builder
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Configure the application with custom settings
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_content_source(mut self, source: ContentSource) -> Self {
        self.config.content_source = source;
        self
    }

    pub fn with_contact_backend(mut self, backend: ContactBackend) -> Self {
        self.config.contact_backend = backend;
        self
    }

    /// Configure repository backend
    pub fn with_repository_backend(mut self, backend: RepositoryBackend) -> Self {
        self.config.repository_backend = backend;
        self
    }

    /// Build the application dependencies
    pub async fn build_dependencies(&self) -> Result<AppDependencies, AppError> {
        let content_provider = self.create_content_provider()?;
        let contact_repository = self.create_repository().await?;

        Ok(AppDependencies {
            content_provider,
            contact_repository,
        })
    }

    /// Build the complete application with services
    ///
    /// Static content is loaded before this returns, so the page never
    /// observes `Loading`. Remote content is requested in the background and
    /// the page shows `Loading` until it settles.
    pub async fn build(self) -> Result<AppServices, AppError> {
        let deps = self.build_dependencies().await?;

        let portfolio_service = Arc::new(PortfolioServiceImpl::new(deps.content_provider));
        let contact_service = Arc::new(ContactServiceImpl::new(deps.contact_repository));

        let contact_gateway: Arc<dyn ContactGateway> = match &self.config.contact_backend {
            ContactBackend::Simulated { delay } => Arc::new(SimulatedContactGateway::new(*delay)),
            ContactBackend::Remote { base_url } => Arc::new(HttpContactGateway::new(base_url)),
            ContactBackend::Local => {
                Arc::new(ServiceContactGateway::new(contact_service.clone()))
            }
        };

        match self.config.content_source {
            ContentSource::Static => {
                portfolio_service.load().await;
            }
            ContentSource::Remote { .. } => portfolio_service.start(),
        }

        info!(
            content_source = ?self.config.content_source,
            contact_backend = ?self.config.contact_backend,
            "Application services built"
        );

        Ok(AppServices {
            portfolio_service,
            contact_service,
            contact_gateway,
        })
    }

    fn create_content_provider(&self) -> Result<Arc<dyn ContentProvider>, AppError> {
        match &self.config.content_source {
            ContentSource::Static => {
                let provider = StaticContentProvider::bundled().map_err(|e| {
                    AppError::ContentInit {
                        message: e.to_string(),
                    }
                })?;
                Ok(Arc::new(provider))
            }
            ContentSource::Remote { base_url } => Ok(Arc::new(RemoteContentProvider::new(base_url))),
        }
    }

    async fn create_repository(&self) -> Result<Arc<dyn ContactRepository>, AppError> {
        match &self.config.repository_backend {
            RepositoryBackend::InMemory => Ok(Arc::new(InMemoryContactRepository::new())),
            RepositoryBackend::Database { connection_string } => {
                let repository = SqlContactRepository::connect(connection_string)
                    .await
                    .map_err(|e| AppError::RepositoryInit {
                        message: e.to_string(),
                    })?;
                repository
                    .migrate()
                    .await
                    .map_err(|e| AppError::RepositoryInit {
                        message: format!("migration failed: {}", e),
                    })?;
                Ok(Arc::new(repository))
            }
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Content initialization error: {message}")]
    ContentInit { message: String },

    #[error("Repository initialization error: {message}")]
    RepositoryInit { message: String },
}

impl AppError {
    pub fn configuration(message: impl Into<String>) -> Self {
        AppError::Configuration {
            message: message.into(),
        }
    }
}

/// Create an application on bundled content with in-memory storage
pub async fn create_static_app() -> Result<AppServices, AppError> {
    AppBuilder::new()
        .with_content_source(ContentSource::Static)
        .with_repository_backend(RepositoryBackend::InMemory)
        .build()
        .await
}

/// Create application from environment variables
pub async fn create_app_from_env() -> Result<AppServices, AppError> {
    let backend_url = std::env::var("BACKEND_URL").ok();

    let content_source = ContentSource::parse(
        std::env::var("CONTENT_SOURCE").as_deref().unwrap_or("static"),
        backend_url.clone(),
    )?;

    let delay_ms = match std::env::var("SUBMIT_DELAY_MS") {
        Ok(value) => value.parse().map_err(|_| {
            AppError::configuration(format!("SUBMIT_DELAY_MS is not a number: {}", value))
        })?,
        Err(_) => DEFAULT_SUBMIT_DELAY.as_millis() as u64,
    };
    let contact_backend = ContactBackend::parse(
        std::env::var("CONTACT_BACKEND").as_deref().unwrap_or("simulated"),
        backend_url,
        delay_ms,
    )?;

    let repository_backend = RepositoryBackend::parse(
        std::env::var("REPOSITORY_BACKEND").as_deref().unwrap_or("memory"),
        std::env::var("DATABASE_URL").ok(),
    )?;

    AppBuilder::new()
        .with_config(AppConfig {
            content_source,
            contact_backend,
            repository_backend,
        })
        .build()
        .await
}
