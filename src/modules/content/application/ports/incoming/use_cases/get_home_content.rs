use async_trait::async_trait;

use crate::content::application::domain::view_models::HomeContentView;

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Resolves the full home-page content in one shot. Infallible by contract:
/// each collection degrades to its bundled fallback on fetch failure or empty
/// results, so the page is never empty and never sees an error.
#[async_trait]
pub trait GetHomeContentUseCase: Send + Sync {
    async fn execute(&self) -> HomeContentView;
}
