use serde::{Deserialize, Serialize};

use super::Time;

/// Categories offered by the resource form.
pub const RESOURCE_CATEGORIES: [&str; 7] = [
    "E-Books",
    "Journals",
    "Databases",
    "Video Tutorials",
    "Websites",
    "Research Papers",
    "Other",
];

/// Link to material hosted outside the library.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitalResource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub category: String,
    pub added_at: Time,
}

impl DigitalResource {
    /// Case-insensitive match on title, description, or category.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        q.is_empty()
            || self.title.to_lowercase().contains(&q)
            || self.description.to_lowercase().contains(&q)
            || self.category.to_lowercase().contains(&q)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitalResourceCreateData {
    pub title: String,
    pub description: String,
    pub url: String,
    pub category: String,
}

impl From<&DigitalResource> for DigitalResourceCreateData {
    fn from(resource: &DigitalResource) -> Self {
        Self {
            title: resource.title.clone(),
            description: resource.description.clone(),
            url: resource.url.clone(),
            category: resource.category.clone(),
        }
    }
}
