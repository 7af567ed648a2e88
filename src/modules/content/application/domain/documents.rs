// src/modules/content/application/domain/documents.rs
//
// Loosely-typed documents as returned by the content repository. Every field
// except identity is optional; the mapper is the single place where missing
// data is converted into well-defined defaults.

use serde::Deserialize;

/// Priority assigned to documents that carry none. Sorts after every
/// explicitly prioritized document under the repository's sort contract.
pub const DEFAULT_PRIORITY: i64 = 10;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Slug {
    pub current: Option<String>,
}

/// Image reference with its asset URL already resolved by the query
/// projection. A reference whose asset did not resolve carries no URL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageRef {
    pub url: Option<String>,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Timeline {
    pub value: Option<i64>,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDimensions {
    pub timeline: Option<Timeline>,
    pub team_size: Option<i64>,
    pub iterations: Option<i64>,
    // The studio schema names the technology count "technologies".
    #[serde(rename = "technologies")]
    pub technology_count: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RichSpan {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RichBlock {
    #[serde(rename = "_type", default)]
    pub block_type: String,
    #[serde(default)]
    pub children: Vec<RichSpan>,
}

/// A section description is either plain text or structured rich-text blocks.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SectionText {
    PlainText(String),
    RichBlocks(Vec<RichBlock>),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionDocument {
    #[serde(rename = "_key")]
    pub key: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<SectionText>,
    #[serde(default)]
    pub images: Vec<ImageRef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: Option<String>,
    pub slug: Option<Slug>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub url: Option<String>,
    pub github_url: Option<String>,
    pub priority: Option<i64>,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Projected by the query as the first resolved cover image URL.
    pub cover_image: Option<String>,
    #[serde(default)]
    pub cover_images: Vec<ImageRef>,
    /// Projected by the query as the resolved logo asset URL.
    pub logo_url: Option<String>,
    pub project_dimensions: Option<ProjectDimensions>,
    #[serde(default)]
    pub project_sections: Vec<SectionDocument>,
}

impl ProjectDocument {
    /// Effective sort key under the repository contract: explicit priority,
    /// or the default that sorts after all explicit values.
    pub fn sort_priority(&self) -> i64 {
        self.priority.unwrap_or(DEFAULT_PRIORITY)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}
