// src/modules/content/application/domain/fallback.rs
//
// Bundled datasets used when the content repository is unreachable or
// returns zero documents. Already in final view-model shape; the resolver
// substitutes them verbatim, never mixed with live entries.

use crate::content::application::domain::view_models::{ProjectView, SectionView, ServiceView};

/// Version-controlled fallback content injected into the resolve services,
/// so tests can substitute a fixed fixture.
#[derive(Debug, Clone)]
pub struct FallbackCatalog {
    pub projects: Vec<ProjectView>,
    pub services: Vec<ServiceView>,
}

impl Default for FallbackCatalog {
    fn default() -> Self {
        Self {
            projects: fallback_projects(),
            services: fallback_services(),
        }
    }
}

fn project(
    numeric_id: u32,
    name: &str,
    slug: &str,
    description: &str,
    category: &str,
    technologies: &[&str],
    features: &[&str],
    duration: &str,
    team: &str,
    team_size: i64,
    priority: i64,
) -> ProjectView {
    ProjectView {
        id: format!("static-project-{numeric_id}"),
        numeric_id,
        name: name.to_string(),
        slug: slug.to_string(),
        url: String::new(),
        demo: String::new(),
        github: String::new(),
        description: description.to_string(),
        category: category.to_string(),
        cover_image: "/next.svg".to_string(),
        thumbnail: "/next.svg".to_string(),
        logo: "/next.svg".to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        features: features.iter().map(|f| f.to_string()).collect(),
        duration: duration.to_string(),
        team: team.to_string(),
        team_size,
        iterations: 1,
        tech_count: technologies.len() as i64,
        role: "Full Stack Developer".to_string(),
        priority,
        sections: features
            .iter()
            .map(|f| SectionView {
                id: f.to_lowercase().replace(' ', "-"),
                name: f.to_string(),
                description: String::new(),
                images: Vec::new(),
            })
            .collect(),
    }
}

fn fallback_projects() -> Vec<ProjectView> {
    vec![
        project(
            1,
            "Nexus Commerce",
            "nexus-commerce",
            "Headless e-commerce storefront with real-time inventory and a custom checkout flow.",
            "E-Commerce",
            &["Next.js", "TypeScript", "Stripe", "Sanity"],
            &["Product Catalog", "Checkout", "Order Tracking"],
            "4 Month(s)",
            "2 developers",
            2,
            1,
        ),
        project(
            2,
            "Pulse Analytics",
            "pulse-analytics",
            "SaaS dashboard that turns raw event streams into live charts and weekly digests.",
            "Web Application",
            &["React", "Node.js", "PostgreSQL"],
            &["Live Dashboards", "Digest Emails", "Team Workspaces"],
            "6 Month(s)",
            "Solo",
            1,
            2,
        ),
        project(
            3,
            "Fieldnote",
            "fieldnote",
            "Offline-first mobile app for field technicians to capture notes, photos, and signatures.",
            "Mobile Development",
            &["React Native", "SQLite", "GraphQL"],
            &["Offline Sync", "Photo Capture", "Signature Pad"],
            "3 months",
            "3 developers",
            3,
            3,
        ),
    ]
}

fn fallback_services() -> Vec<ServiceView> {
    vec![
        ServiceView {
            title: "Web Development".to_string(),
            icon: "globe".to_string(),
            description: "Fast, accessible web applications from landing page to production backend."
                .to_string(),
            features: vec![
                "Frontend".to_string(),
                "Backend".to_string(),
                "Performance".to_string(),
            ],
        },
        ServiceView {
            title: "Mobile Development".to_string(),
            icon: "smartphone".to_string(),
            description: "Cross-platform mobile apps that feel native on both stores.".to_string(),
            features: vec!["iOS".to_string(), "Android".to_string()],
        },
        ServiceView {
            title: "UI/UX Design".to_string(),
            icon: "palette".to_string(),
            description: "Interfaces designed around the people who actually use them.".to_string(),
            features: vec!["Design Systems".to_string(), "Prototyping".to_string()],
        },
        ServiceView {
            title: "API Integration".to_string(),
            icon: "code".to_string(),
            description: "Third-party and custom API integrations with clean failure handling."
                .to_string(),
            features: vec!["REST".to_string(), "Webhooks".to_string()],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_never_empty() {
        let catalog = FallbackCatalog::default();
        assert!(!catalog.projects.is_empty());
        assert!(!catalog.services.is_empty());
    }

    #[test]
    fn fallback_projects_satisfy_view_invariants() {
        for p in FallbackCatalog::default().projects {
            assert!(!p.name.is_empty());
            assert!(!p.description.is_empty());
            assert!(!p.category.is_empty());
            assert!(!p.cover_image.is_empty());
            assert!(!p.logo.is_empty());
            assert!(!p.duration.is_empty());
            assert!(!p.team.is_empty());
            assert!(!p.technologies.is_empty());
            assert!(p.numeric_id >= 1);
        }
    }
}
