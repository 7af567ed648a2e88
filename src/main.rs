pub mod modules;
pub use modules::contact;
pub use modules::content;
pub mod api;
pub mod health;
pub mod shared;

use crate::contact::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::contact::application::ports::outgoing::email_sender::EmailSender;
use crate::contact::application::service::ContactService;
use crate::content::adapter::outgoing::{SanityConfig, SanityContentQuery};
use crate::content::application::domain::fallback::FallbackCatalog;
use crate::content::application::ports::incoming::use_cases::{
    GetHomeContentUseCase, GetProjectBySlugUseCase, GetProjectsUseCase, GetServicesUseCase,
};
use crate::content::application::ports::outgoing::content_query::ContentQuery;
use crate::content::application::service::{
    GetHomeContentService, GetProjectBySlugService, GetProjectsService, GetServicesService,
};
use crate::shared::api::json_config::custom_json_config;

use actix_web::{web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use std::env;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub get_home_content: Arc<dyn GetHomeContentUseCase + Send + Sync>,
    pub get_projects: Arc<dyn GetProjectsUseCase + Send + Sync>,
    pub get_services: Arc<dyn GetServicesUseCase + Send + Sync>,
    pub get_project_by_slug: Arc<dyn GetProjectBySlugUseCase + Send + Sync>,
    pub submit_contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env_name = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    // Content repository
    let sanity_config = SanityConfig::from_env();
    let content_query: Arc<dyn ContentQuery> =
        Arc::new(SanityContentQuery::new(&sanity_config));
    let fallback = Arc::new(FallbackCatalog::default());

    // SMTP SETUPS. The contact endpoint stays up without credentials and
    // answers 503 until they are configured.
    let contact_recipient =
        env::var("CONTACT_RECIPIENT").expect("CONTACT_RECIPIENT is not set in .env file");
    let email_sender: Option<Arc<dyn EmailSender>> = if env_name == "test" {
        // Local Mailpit
        let from_email = env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
        let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let smtp_port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        Some(Arc::new(SmtpEmailSender::new_local(
            &smtp_host, smtp_port, &from_email,
        )))
    } else {
        match (
            env::var("EMAIL_FROM"),
            env::var("SMTP_SERVER"),
            env::var("SMTP_USERNAME"),
            env::var("SMTP_PASSWORD"),
        ) {
            (Ok(from_email), Ok(server), Ok(user), Ok(pass)) => Some(Arc::new(
                SmtpEmailSender::new(&server, &user, &pass, &from_email),
            )),
            _ => {
                warn!("SMTP credentials not configured; contact submissions will be rejected");
                None
            }
        }
    };

    let state = AppState {
        get_home_content: Arc::new(GetHomeContentService::new(
            Arc::clone(&content_query),
            Arc::clone(&fallback),
        )),
        get_projects: Arc::new(GetProjectsService::new(
            Arc::clone(&content_query),
            Arc::clone(&fallback),
        )),
        get_services: Arc::new(GetServicesService::new(
            Arc::clone(&content_query),
            Arc::clone(&fallback),
        )),
        get_project_by_slug: Arc::new(GetProjectBySlugService::new(Arc::clone(&content_query))),
        submit_contact: Arc::new(ContactService::new(email_sender, &contact_recipient)),
    };

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    // Content
    cfg.service(crate::content::adapter::incoming::web::routes::get_home_content_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_services_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_project_by_slug_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
