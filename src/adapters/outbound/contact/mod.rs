mod http_contact_gateway;
mod service_contact_gateway;
mod simulated_contact_gateway;

pub use http_contact_gateway::HttpContactGateway;
pub use service_contact_gateway::ServiceContactGateway;
pub use simulated_contact_gateway::{DEFAULT_SUBMIT_DELAY, SimulatedContactGateway};
