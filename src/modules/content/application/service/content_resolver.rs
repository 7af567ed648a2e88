// src/modules/content/application/service/content_resolver.rs
//
// Fallback substitution policy. Per collection and per request the fetch
// outcome moves Pending → {Fulfilled-NonEmpty, Fulfilled-Empty, Rejected};
// only Fulfilled-NonEmpty uses live-mapped data, the other two terminal
// states resolve to the bundled fallback verbatim. Substitution is
// all-or-nothing at the collection level: live and static entries are never
// mixed.

use tracing::warn;

use crate::content::application::domain::documents::{ProjectDocument, ServiceDocument};
use crate::content::application::domain::view_models::{ProjectView, ServiceView};
use crate::content::application::mapper::project::map_project;
use crate::content::application::mapper::service::map_service;
use crate::content::application::ports::outgoing::content_query::ContentQueryError;

pub fn resolve_projects(
    outcome: Result<Vec<ProjectDocument>, ContentQueryError>,
    fallback: &[ProjectView],
) -> Vec<ProjectView> {
    match outcome {
        // Order preserved as received; the repository owns the sort contract.
        Ok(docs) if !docs.is_empty() => docs.iter().map(map_project).collect(),
        Ok(_) => fallback.to_vec(),
        Err(err) => {
            warn!("Project fetch degraded to fallback content: {}", err);
            fallback.to_vec()
        }
    }
}

pub fn resolve_services(
    outcome: Result<Vec<ServiceDocument>, ContentQueryError>,
    fallback: &[ServiceView],
) -> Vec<ServiceView> {
    match outcome {
        Ok(docs) if !docs.is_empty() => docs.iter().map(map_service).collect(),
        Ok(_) => fallback.to_vec(),
        Err(err) => {
            warn!("Service fetch degraded to fallback content: {}", err);
            fallback.to_vec()
        }
    }
}
