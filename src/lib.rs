pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - content model, contact submissions and value objects
pub use domain::{
    // Models
    About,
    Certification,
    ContactDraft,
    ContactInfo,
    ContactSubmission,
    // Errors
    ContentError,
    // Value objects
    EmailAddress,
    ExperienceEntry,
    FormError,
    Hero,
    NewContactSubmission,
    PaletteColor,
    PortfolioContent,
    Rating,
    Readiness,
    SectionId,
    ServiceKey,
    ServiceOffering,
    SubmissionAck,
    SubmissionError,
    Testimonial,
    ValidationError,
};

// Port types - interfaces for external systems
pub use ports::{ContactGateway, ContactRepository, ContactService, ContentProvider, PortfolioService};

// Service implementations - business logic
pub use services::{
    ContactForm, ContactFormView, ContactServiceImpl, FormNotice, FormStatus, PortfolioServiceImpl,
};

// Application factory and configuration
pub use app::{
    AppBuilder, AppConfig, AppDependencies, AppError, AppServices, ContactBackend, ContentSource,
    RepositoryBackend, create_app_from_env, create_static_app,
};

// Adapter types - infrastructure implementations
pub use adapters::inbound::{
    http::{AppState, create_router},
    web::render_page,
};
pub use adapters::outbound::{
    contact::{HttpContactGateway, ServiceContactGateway, SimulatedContactGateway},
    content::{RemoteContentProvider, StaticContentProvider},
    persistence::{InMemoryContactRepository, SqlContactRepository},
};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        AppBuilder, AppServices, ContactForm, ContactGateway, ContentProvider, PortfolioContent,
        PortfolioService, Readiness, StaticContentProvider, create_router, create_static_app,
        render_page,
    };
}
