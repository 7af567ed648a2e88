// src/modules/content/application/mapper/service.rs

use crate::content::application::domain::documents::ServiceDocument;
use crate::content::application::domain::view_models::ServiceView;

/// Icon identifier used when a service document carries none. The
/// presentation layer resolves identifiers through its own lookup table and
/// falls back to one default glyph for anything it does not recognize, so the
/// identifier is passed through unresolved here.
pub const FALLBACK_ICON: &str = "code";

pub fn map_service(doc: &ServiceDocument) -> ServiceView {
    ServiceView {
        title: doc.name.clone().unwrap_or_default(),
        icon: doc
            .icon
            .clone()
            .filter(|icon| !icon.is_empty())
            .unwrap_or_else(|| FALLBACK_ICON.to_string()),
        description: doc
            .short_description
            .clone()
            .filter(|d| !d.is_empty())
            .or_else(|| doc.description.clone())
            .unwrap_or_default(),
        features: doc.categories.clone(),
    }
}
