use async_trait::async_trait;

use crate::content::application::domain::view_models::ServiceView;

/// Lists resolved service views, with the same degrade-to-fallback contract
/// as project listing, evaluated independently of it.
#[async_trait]
pub trait GetServicesUseCase: Send + Sync {
    async fn execute(&self) -> Vec<ServiceView>;
}
