use serde::{Deserialize, Serialize};

/// One portfolio entry as rendered by the project listing and detail pages.
///
/// The JSON form uses camelCase keys (`fullDescription`, `keyFeatures`,
/// `liveDemo`) so that records produced by other tooling for the same site
/// deserialize without a mapping layer. Everything except `id`, `title` and
/// `description` may be omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Unique within a collection. Used in `/api/projects/{id}` and `#/projects/{id}`.
    pub id: String,
    pub title: String,
    /// Short summary shown on cards.
    pub description: String,
    /// Long description shown on the detail page. Rendered as Markdown.
    #[serde(default)]
    pub full_description: String,
    #[serde(default)]
    pub key_features: Vec<String>,
    /// Ordered technology tags; also the keys of the listing filter.
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: ProjectImages,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_demo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Up to three screenshot references, in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectImages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img3: Option<String>,
}

impl ProjectImages {
    /// The first available image, used as the card thumbnail.
    pub fn cover(&self) -> Option<&str> {
        self.iter().next()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [&self.img1, &self.img2, &self.img3]
            .into_iter()
            .filter_map(|img| img.as_deref())
    }
}

impl ProjectRecord {
    pub fn uses_technology(&self, technology: &str) -> bool {
        self.technologies.iter().any(|t| t == technology)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_record_with_defaults() {
        let json = r#"{"id":"p","title":"T","description":"D"}"#;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, "p");
        assert!(record.technologies.is_empty());
        assert!(!record.featured);
        assert_eq!(record.image.cover(), None);
        assert_eq!(record.live_demo, None);
    }

    #[test]
    fn reads_camel_case_keys() {
        let json = r#"{
            "id": "p",
            "title": "T",
            "description": "D",
            "fullDescription": "Long",
            "keyFeatures": ["a"],
            "liveDemo": "https://demo",
            "image": {"img2": "/b.jpg", "img3": "/c.jpg"},
            "featured": true
        }"#;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.full_description, "Long");
        assert_eq!(record.key_features, vec!["a".to_string()]);
        assert_eq!(record.live_demo.as_deref(), Some("https://demo"));
        assert_eq!(record.image.cover(), Some("/b.jpg"));
        assert_eq!(record.image.iter().count(), 2);
        assert!(record.featured);
    }
}
