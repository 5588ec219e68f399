mod remote_content_provider;
mod static_content_provider;

pub use remote_content_provider::RemoteContentProvider;
pub use static_content_provider::{BUNDLED_CONTENT, StaticContentProvider};
