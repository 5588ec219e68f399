mod email_address;
mod palette_color;
mod rating;
mod section_id;
mod service_key;

pub use email_address::EmailAddress;
pub use palette_color::{PaletteColor, ServiceStyle};
pub use rating::{Indicator, Rating};
pub use section_id::SectionId;
pub use service_key::ServiceKey;
