//! Lazy image loading and image failure handling.

use std::collections::HashMap;

/// One tracked image element.
#[derive(Debug, Clone, Default)]
pub struct LazyImage {
    /// Deferred source, set until the image becomes visible.
    pub data_src: Option<String>,
    /// Live source, set once loading has been triggered.
    pub src: Option<String>,
    /// Hidden after a load failure.
    pub hidden: bool,
    observed: bool,
}

/// Tracks images that load when they scroll into view.
///
/// Visibility reports swap `data-src` into `src` exactly once per image;
/// a load failure hides the element and logs a warning, never failing
/// the page.
#[derive(Debug, Default)]
pub struct LazyLoader {
    images: HashMap<String, LazyImage>,
}

impl LazyLoader {
    /// Create an empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start observing an image with a deferred source.
    pub fn observe(&mut self, id: impl Into<String>, data_src: impl Into<String>) {
        self.images.insert(
            id.into(),
            LazyImage {
                data_src: Some(data_src.into()),
                src: None,
                hidden: false,
                observed: true,
            },
        );
    }

    /// The image became visible.
    ///
    /// Returns the source to load on first visibility; afterwards the
    /// image is unobserved and further reports are no-ops.
    pub fn on_visible(&mut self, id: &str) -> Option<String> {
        let image = self.images.get_mut(id)?;
        if !image.observed {
            return None;
        }
        let src = image.data_src.take()?;
        image.src = Some(src.clone());
        image.observed = false;
        Some(src)
    }

    /// The image failed to load; hide it.
    pub fn on_error(&mut self, id: &str) {
        if let Some(image) = self.images.get_mut(id) {
            image.hidden = true;
            tracing::warn!(image = id, src = image.src.as_deref(), "failed to load image");
        }
    }

    /// Look up a tracked image.
    pub fn image(&self, id: &str) -> Option<&LazyImage> {
        self.images.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_swaps_source_once() {
        let mut loader = LazyLoader::new();
        loader.observe("dish-biryani", "/img/biryani.jpg");

        assert_eq!(
            loader.on_visible("dish-biryani"),
            Some("/img/biryani.jpg".to_string())
        );
        let image = loader.image("dish-biryani").unwrap();
        assert_eq!(image.src.as_deref(), Some("/img/biryani.jpg"));
        assert!(image.data_src.is_none());

        // Unobserved after the first report.
        assert_eq!(loader.on_visible("dish-biryani"), None);
    }

    #[test]
    fn test_unknown_image_is_noop() {
        let mut loader = LazyLoader::new();
        assert_eq!(loader.on_visible("missing"), None);
        loader.on_error("missing");
    }

    #[test]
    fn test_load_failure_hides_image() {
        let mut loader = LazyLoader::new();
        loader.observe("dish-dosa", "/img/dosa.jpg");
        loader.on_visible("dish-dosa");
        loader.on_error("dish-dosa");

        assert!(loader.image("dish-dosa").unwrap().hidden);
    }
}
