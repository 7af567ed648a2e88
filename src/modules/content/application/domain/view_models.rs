// src/modules/content/application/domain/view_models.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

//
// ──────────────────────────────────────────────────────────
// View models
// ──────────────────────────────────────────────────────────
//
// Fully-normalized records consumed directly by the presentation layer.
// Every field is non-optional: the mapper resolves all missing repository
// data into defaults before a view model is ever constructed, and no
// downstream consumer carries its own fallback logic.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SectionView {
    pub id: String,
    pub name: String,
    /// Plain text. Rich-text block content is flattened before it gets here.
    pub description: String,
    /// Resolved image URLs only; references without a URL are dropped.
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectView {
    /// Opaque repository identifier.
    pub id: String,
    /// Digits-only derivation of `id` for routing contexts that need a
    /// numeric key. Lossy and collision-prone; see `mapper::numeric_id`.
    pub numeric_id: u32,
    pub name: String,
    /// Empty string means "not linkable": excluded from path generation.
    pub slug: String,
    pub url: String,
    pub demo: String,
    pub github: String,
    pub description: String,
    pub category: String,
    pub cover_image: String,
    pub thumbnail: String,
    pub logo: String,
    /// Never empty; a generic technology list substitutes when absent.
    pub technologies: Vec<String>,
    /// Section names; may be empty when the document has no sections.
    pub features: Vec<String>,
    pub duration: String,
    pub team: String,
    pub team_size: i64,
    pub iterations: i64,
    pub tech_count: i64,
    pub role: String,
    pub priority: i64,
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ServiceView {
    pub title: String,
    /// Raw icon identifier (e.g. "code"). Resolution to a glyph happens in
    /// the presentation layer's lookup table, which falls back to a default
    /// glyph for unrecognized identifiers.
    pub icon: String,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HomeContentView {
    pub projects: Vec<ProjectView>,
    pub services: Vec<ServiceView>,
}
