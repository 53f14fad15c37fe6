//! Hero carousel slides.

use serde::{Deserialize, Serialize};

/// One rotation frame of the hero display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Resolved image URI.
    pub image: String,
    pub title: String,
    pub subtitle: String,
}

impl Slide {
    pub fn new(
        image: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

/// A slide as written in configuration, with an image path relative to the
/// static asset base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideSpec {
    pub image: String,
    pub title: String,
    pub subtitle: String,
}

impl SlideSpec {
    /// Resolve the image path against `static_base`.
    ///
    /// Absolute paths and URLs are kept as they are.
    pub fn resolve(&self, static_base: &str) -> Slide {
        let image = if is_absolute_ref(&self.image) {
            self.image.clone()
        } else {
            join_base(static_base, &self.image)
        };
        Slide::new(image, self.title.clone(), self.subtitle.clone())
    }
}

fn is_absolute_ref(image: &str) -> bool {
    image.starts_with('/') || image.contains("://") || image.starts_with("data:")
}

fn join_base(base: &str, path: &str) -> String {
    if base.is_empty() || base.ends_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(image: &str) -> SlideSpec {
        SlideSpec {
            image: image.to_string(),
            title: "Title".to_string(),
            subtitle: "Subtitle".to_string(),
        }
    }

    #[test]
    fn relative_image_is_prefixed() {
        assert_eq!(
            spec("images/faculte.png").resolve("/static/").image,
            "/static/images/faculte.png"
        );
        assert_eq!(
            spec("images/faculte.png").resolve("https://cdn.example.org/assets").image,
            "https://cdn.example.org/assets/images/faculte.png"
        );
    }

    #[test]
    fn absolute_image_is_kept() {
        assert_eq!(spec("/media/a.jpg").resolve("/static/").image, "/media/a.jpg");
        assert_eq!(
            spec("https://x.org/a.jpg").resolve("/static/").image,
            "https://x.org/a.jpg"
        );
    }
}
