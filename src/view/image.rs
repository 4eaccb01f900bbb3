//! Best-effort image reference for a product row.
//!
//! The endpoint often ships image URLs wrapped in stray JSON quoting or
//! pointing at placeholder services; this picks the first usable one.

use crate::catalog::Category;
use std::fmt;

const PLACEHOLDER_LABEL_CHARS: usize = 20;
const FALLBACK_LABEL: &str = "Product";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    Remote(String),
    /// Nothing usable; draw a placeholder labelled with the product name.
    Placeholder { label: String },
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRef::Remote(url) => f.write_str(url),
            ImageRef::Placeholder { label } => write!(f, "[{}]", label),
        }
    }
}

pub struct ImageResolver {
    blocklist: Vec<String>,
}

impl ImageResolver {
    pub fn new(blocklist: Vec<String>) -> Self {
        Self { blocklist }
    }

    /// Product images first, then the category image, then a placeholder.
    pub fn resolve(&self, images: &[String], category: Option<&Category>, title: &str) -> ImageRef {
        let from_images = images.iter().find_map(|raw| self.usable(raw));
        let from_category = || {
            category
                .and_then(|category| category.image.as_deref())
                .and_then(|raw| self.usable(raw))
        };

        match from_images.or_else(from_category) {
            Some(url) => ImageRef::Remote(url),
            None => ImageRef::Placeholder {
                label: placeholder_label(title),
            },
        }
    }

    fn usable(&self, raw: &str) -> Option<String> {
        let cleaned = clean_url(raw);
        if cleaned.is_empty() || self.is_blocked(&cleaned) {
            return None;
        }
        if cleaned.starts_with("http://") || cleaned.starts_with("https://") {
            Some(cleaned)
        } else {
            None
        }
    }

    fn is_blocked(&self, url: &str) -> bool {
        self.blocklist.iter().any(|host| url.contains(host.as_str()))
    }
}

/// Drop brackets and quotes left over from double-encoded arrays.
fn clean_url(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '[' | ']' | '"' | '\''))
        .collect::<String>()
        .trim()
        .to_string()
}

fn placeholder_label(title: &str) -> String {
    if title.is_empty() {
        return FALLBACK_LABEL.to_string();
    }
    title.chars().take(PLACEHOLDER_LABEL_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> ImageResolver {
        ImageResolver::new(vec!["placeimg.com".to_string(), "placehold.co".to_string()])
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn first_valid_url_wins() {
        let images = strings(&["https://i.imgur.com/a.jpeg", "https://i.imgur.com/b.jpeg"]);
        assert_eq!(
            resolver().resolve(&images, None, "Hat"),
            ImageRef::Remote("https://i.imgur.com/a.jpeg".to_string())
        );
    }

    #[test]
    fn stray_quoting_is_removed() {
        let images = strings(&["[\"https://i.imgur.com/a.jpeg\""]);
        assert_eq!(
            resolver().resolve(&images, None, "Hat"),
            ImageRef::Remote("https://i.imgur.com/a.jpeg".to_string())
        );
    }

    #[test]
    fn blocked_and_relative_urls_are_skipped() {
        let images = strings(&[
            "https://placeimg.com/640/480/any",
            "/static/local.png",
            "  ",
            "https://cdn.example.com/ok.png",
        ]);
        assert_eq!(
            resolver().resolve(&images, None, "Hat"),
            ImageRef::Remote("https://cdn.example.com/ok.png".to_string())
        );
    }

    #[test]
    fn falls_back_to_category_image() {
        let category = Category {
            name: "Clothes".to_string(),
            image: Some("'https://cdn.example.com/clothes.png'".to_string()),
        };
        assert_eq!(
            resolver().resolve(&[], Some(&category), "Hat"),
            ImageRef::Remote("https://cdn.example.com/clothes.png".to_string())
        );
    }

    #[test]
    fn blocked_category_image_gives_placeholder() {
        let category = Category {
            name: "Clothes".to_string(),
            image: Some("https://placehold.co/600x400".to_string()),
        };
        let image = resolver().resolve(&[], Some(&category), "A very long product title here");
        assert_eq!(
            image,
            ImageRef::Placeholder {
                label: "A very long product ".to_string()
            }
        );
        assert_eq!(image.to_string(), "[A very long product ]");
    }

    #[test]
    fn empty_title_uses_generic_label() {
        assert_eq!(
            resolver().resolve(&[], None, ""),
            ImageRef::Placeholder {
                label: "Product".to_string()
            }
        );
    }
}
