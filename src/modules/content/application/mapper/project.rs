// src/modules/content/application/mapper/project.rs
//
// Pure mapping from a repository ProjectDocument to a ProjectView. Every
// optional field is resolved to a deterministic default here and nowhere
// else; downstream code must not re-apply its own fallbacks.

use crate::content::application::domain::documents::{
    ProjectDocument, SectionDocument, SectionText, DEFAULT_PRIORITY,
};
use crate::content::application::domain::view_models::{ProjectView, SectionView};

pub const FALLBACK_NAME: &str = "Untitled Project";
pub const FALLBACK_DESCRIPTION: &str = "No description available";
pub const FALLBACK_CATEGORY: &str = "Web Development";
pub const FALLBACK_SECTION_NAME: &str = "Untitled Section";
pub const FALLBACK_ASSET: &str = "/next.svg";
pub const FALLBACK_DURATION: &str = "3 months";
pub const FALLBACK_TEAM: &str = "Solo";
pub const FALLBACK_ROLE: &str = "Full Stack Developer";

pub fn fallback_technologies() -> Vec<String> {
    vec!["React".to_string(), "Next.js".to_string()]
}

pub fn map_project(doc: &ProjectDocument) -> ProjectView {
    let slug = doc
        .slug
        .as_ref()
        .and_then(|s| s.current.clone())
        .unwrap_or_default();

    // Cover image resolution order: projected coverImage, then the first
    // resolved URL among coverImages, then the placeholder asset.
    let cover_image = doc
        .cover_image
        .clone()
        .filter(|url| !url.is_empty())
        .or_else(|| {
            doc.cover_images
                .iter()
                .find_map(|img| img.url.clone().filter(|url| !url.is_empty()))
        })
        .unwrap_or_else(|| FALLBACK_ASSET.to_string());

    let logo = doc
        .logo_url
        .clone()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| FALLBACK_ASSET.to_string());

    let url = doc.url.clone().unwrap_or_default();
    let github = doc
        .github_url
        .clone()
        .filter(|u| !u.is_empty())
        .or_else(|| doc.url.clone())
        .unwrap_or_default();

    let technologies = if doc.technologies.is_empty() {
        fallback_technologies()
    } else {
        doc.technologies.clone()
    };

    let dims = doc.project_dimensions.as_ref();

    let duration = dims
        .and_then(|d| d.timeline.as_ref())
        .and_then(|t| match (t.value, t.unit.as_ref()) {
            (Some(value), Some(unit)) => Some(format!("{} {}", value, unit)),
            _ => None,
        })
        .unwrap_or_else(|| FALLBACK_DURATION.to_string());

    let team_size = dims.and_then(|d| d.team_size);
    let team = match team_size {
        Some(n) if n > 1 => format!("{} developers", n),
        Some(n) => format!("{} developer", n),
        None => FALLBACK_TEAM.to_string(),
    };

    let features: Vec<String> = doc
        .project_sections
        .iter()
        .filter_map(|section| section.name.clone())
        .filter(|name| !name.is_empty())
        .collect();

    let sections = doc.project_sections.iter().map(map_section).collect();

    ProjectView {
        id: doc.id.clone(),
        numeric_id: numeric_id(&doc.id),
        name: doc
            .name
            .clone()
            .unwrap_or_else(|| FALLBACK_NAME.to_string()),
        slug,
        demo: url.clone(),
        url,
        github,
        description: doc
            .description
            .clone()
            .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string()),
        category: doc
            .category
            .clone()
            .unwrap_or_else(|| FALLBACK_CATEGORY.to_string()),
        thumbnail: cover_image.clone(),
        cover_image,
        logo,
        technologies: technologies.clone(),
        features,
        duration,
        team,
        team_size: team_size.unwrap_or(1),
        iterations: dims.and_then(|d| d.iterations).unwrap_or(1),
        tech_count: dims
            .and_then(|d| d.technology_count)
            .unwrap_or(technologies.len() as i64),
        role: FALLBACK_ROLE.to_string(),
        priority: doc.priority.unwrap_or(DEFAULT_PRIORITY),
        sections,
    }
}

fn map_section(section: &SectionDocument) -> SectionView {
    // Id fallback chain: structural key, explicit id, name, literal.
    let id = section
        .key
        .clone()
        .filter(|k| !k.is_empty())
        .or_else(|| section.id.clone().filter(|i| !i.is_empty()))
        .or_else(|| section.name.clone().filter(|n| !n.is_empty()))
        .unwrap_or_else(|| "section".to_string());

    SectionView {
        id,
        name: section
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| FALLBACK_SECTION_NAME.to_string()),
        description: section
            .description
            .as_ref()
            .map(flatten_section_text)
            .unwrap_or_default(),
        images: section
            .images
            .iter()
            .filter_map(|img| img.url.clone())
            .filter(|url| !url.is_empty())
            .collect(),
    }
}

/// Flattens a section description to plain text. Plain strings pass through
/// unchanged, so flattening already-flattened text is a no-op. Rich blocks
/// contribute their children's text spans joined by single spaces; blocks of
/// any other type contribute the empty string.
pub fn flatten_section_text(text: &SectionText) -> String {
    match text {
        SectionText::PlainText(plain) => plain.clone(),
        SectionText::RichBlocks(blocks) => blocks
            .iter()
            .map(|block| {
                if block.block_type == "block" {
                    block
                        .children
                        .iter()
                        .filter_map(|span| span.text.clone())
                        .collect::<Vec<_>>()
                        .join(" ")
                } else {
                    String::new()
                }
            })
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// Derives a numeric key from an opaque repository identifier by keeping the
/// digits and parsing them. Empty or zero results map to 1.
///
/// Known limitation: this is lossy and can collide for distinct documents
/// (e.g. "a1b2" and "b1c2" both become 12). Kept for parity with the routing
/// contexts that require a numeric key.
pub fn numeric_id(id: &str) -> u32 {
    let digits: String = id.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => 1,
    }
}
