use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::{
    errors::ValidationError,
    value_objects::{PaletteColor, Rating},
};

/// Root aggregate of everything the page displays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub hero: Hero,
    pub about: About,
    pub services: Vec<ServiceOffering>,
    pub experience: Vec<ExperienceEntry>,
    pub certifications: Vec<Certification>,
    pub testimonials: Vec<Testimonial>,
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    pub tagline: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub title: String,
    pub description: String,
    pub highlights: Vec<String>,
    #[serde(rename = "currentFocus")]
    pub current_focus: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    /// Symbolic glyph shown at the top of the card
    pub icon: String,
    pub color: PaletteColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: u32,
    pub role: String,
    pub organization: String,
    /// Free-form display string, e.g. "Nov 2024 - Current"
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub id: u32,
    pub title: String,
    pub issuer: String,
    pub year: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: Rating,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub title: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub services: Vec<String>,
}

impl PortfolioContent {
    /// Decode a JSON payload and validate it before anyone renders it
    ///
    /// An unknown palette color or an out-of-range rating is reported with its
    /// own variant; any other decode failure is `Malformed`.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ValidationError> {
        let content: PortfolioContent = serde_json::from_slice(bytes).map_err(|e| {
            value_object_error(bytes).unwrap_or_else(|| ValidationError::Malformed {
                message: e.to_string(),
            })
        })?;
        content.validate()?;
        Ok(content)
    }

    /// Check the invariants the decoder cannot express
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("hero.name", &self.hero.name)?;
        require_text("about.title", &self.about.title)?;
        require_text("contact.title", &self.contact.title)?;
        require_text("contact.email", &self.contact.email)?;

        ensure_unique_ids("services", self.services.iter().map(|s| s.id))?;
        ensure_unique_ids("experience", self.experience.iter().map(|e| e.id))?;
        ensure_unique_ids("certifications", self.certifications.iter().map(|c| c.id))?;
        ensure_unique_ids("testimonials", self.testimonials.iter().map(|t| t.id))?;

        if let Some(service) = self.services.iter().find(|s| s.features.is_empty()) {
            return Err(ValidationError::NoFeatures {
                service_id: service.id,
            });
        }

        Ok(())
    }

    /// Brand shown by the header and footer
    pub fn brand(&self) -> &str {
        &self.hero.name
    }
}

/// Recover the typed error of a value object that failed inside the decoder
fn value_object_error(bytes: &[u8]) -> Option<ValidationError> {
    let value: serde_json::Value = serde_json::from_slice(bytes).ok()?;

    let color = value["services"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|service| service["color"].as_str())
        .find_map(|color| color.parse::<PaletteColor>().err());

    color.or_else(|| {
        value["testimonials"]
            .as_array()
            .into_iter()
            .flatten()
            .filter_map(|testimonial| testimonial["rating"].as_i64())
            .find_map(|rating| Rating::new(rating).err())
    })
}

fn require_text(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::missing(field));
    }
    Ok(())
}

fn ensure_unique_ids(
    collection: &str,
    ids: impl Iterator<Item = u32>,
) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ValidationError::DuplicateId {
                collection: collection.to_string(),
                id,
            });
        }
    }
    Ok(())
}
