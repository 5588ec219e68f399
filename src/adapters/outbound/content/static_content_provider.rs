use async_trait::async_trait;

use crate::{
    domain::{errors::ContentResult, models::PortfolioContent},
    ports::content::ContentProvider,
};

/// Content shipped with the binary
pub const BUNDLED_CONTENT: &[u8] = include_bytes!("../../../../content/portfolio.json");

/// ContentProvider over a value that is already in memory
#[derive(Debug, Clone)]
pub struct StaticContentProvider {
    content: PortfolioContent,
}

impl StaticContentProvider {
    pub fn new(content: PortfolioContent) -> ContentResult<Self> {
        content.validate()?;
        Ok(Self { content })
    }

    /// Provider for the bundled portfolio
    pub fn bundled() -> ContentResult<Self> {
        Ok(Self {
            content: PortfolioContent::from_json(BUNDLED_CONTENT)?,
        })
    }

    pub fn content(&self) -> &PortfolioContent {
        &self.content
    }
}

#[async_trait]
impl ContentProvider for StaticContentProvider {
    async fn fetch(&self) -> ContentResult<PortfolioContent> {
        Ok(self.content.clone())
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{errors::ContentError, value_objects::PaletteColor};

    #[test]
    fn test_bundled_content_is_valid() {
        let provider = StaticContentProvider::bundled().unwrap();
        let content = provider.content();

        assert_eq!(content.hero.name, "Gunjan Jagtiani");
        assert_eq!(content.services.len(), 4);
        assert_eq!(content.experience.len(), 4);
        assert_eq!(content.certifications.len(), 5);
        assert_eq!(content.testimonials.len(), 4);
        assert_eq!(content.contact.services.len(), 6);
        assert_eq!(
            content.services.iter().map(|s| s.color).collect::<Vec<_>>(),
            PaletteColor::ALL.to_vec()
        );
    }

    #[tokio::test]
    async fn test_fetch_returns_content() {
        let provider = StaticContentProvider::bundled().unwrap();
        let fetched = provider.fetch().await.unwrap();
        assert_eq!(&fetched, provider.content());
    }

    #[test]
    fn test_invalid_content_is_refused() {
        let mut content = StaticContentProvider::bundled().unwrap().content().clone();
        content.hero.name.clear();
        let err = StaticContentProvider::new(content).unwrap_err();
        assert!(matches!(err, ContentError::DataShape(_)));
    }
}
