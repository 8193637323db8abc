/// A showcased product
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Product {
    pub title: String,
    /// Card blurb
    pub description: String,
    /// Detail view body
    pub long_description: String,
    pub features: Vec<String>,
    pub tags: Vec<String>,
    pub year: String,
    /// Logo reference, if the product has one
    pub image: Option<String>,
    /// Ordered screenshot references shown in the detail view
    pub screenshots: Vec<String>,
}

impl Product {
    pub fn new(title: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year: year.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_long_description(mut self, long_description: impl Into<String>) -> Self {
        self.long_description = long_description.into();
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_screenshots<I, S>(mut self, screenshots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.screenshots = screenshots.into_iter().map(Into::into).collect();
        self
    }

    /// Features listed on the card; the rest are summarised as "+ N more"
    pub fn headline_features(&self, limit: usize) -> (&[String], usize) {
        let shown = limit.min(self.features.len());
        (&self.features[..shown], self.features.len() - shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let product = Product::new("GenXLink", "2025")
            .with_tags(["Rust", "Security"])
            .with_screenshots(Vec::<String>::new());

        assert_eq!(product.title, "GenXLink");
        assert_eq!(product.tags, vec!["Rust".to_string(), "Security".to_string()]);
        assert!(product.image.is_none());
        assert!(product.screenshots.is_empty());
    }

    #[test]
    fn test_headline_features() {
        let product = Product::new("NeuralCore", "2026").with_features(["a", "b", "c", "d", "e"]);

        let (shown, rest) = product.headline_features(3);
        assert_eq!(shown.len(), 3);
        assert_eq!(rest, 2);

        let (shown, rest) = product.headline_features(10);
        assert_eq!(shown.len(), 5);
        assert_eq!(rest, 0);
    }
}
