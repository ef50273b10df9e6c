pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::profile;

use crate::api::openapi::ApiDoc;
use crate::config::ServerConfig;
use crate::profile::adapter::outgoing::ProfileSourceFile;
use crate::profile::application::ports::incoming::use_cases::FetchProfileUseCase;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::service::{
    FetchProfileService, GetPublicProfileService, ValidateProfileService,
};
use crate::shared::api::custom_json_config;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub profile: ProfileUseCases,
}

impl AppState {
    /// Wires the profile use cases over a single payload source.
    pub fn from_source(source: ProfileSourceFile) -> Self {
        let fetch: Arc<dyn FetchProfileUseCase + Send + Sync> =
            Arc::new(FetchProfileService::new(source));

        Self {
            profile: ProfileUseCases {
                get_public: Arc::new(GetPublicProfileService::new(Arc::clone(&fetch))),
                validate: Arc::new(ValidateProfileService::new()),
                fetch,
            },
        }
    }
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

    config::load_env_files();
    let config = ServerConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let server_url = config.server_url();
    let source = ProfileSourceFile::new(config.profile_path);
    info!(
        "Serving profile from {} on {}",
        source.path().display(),
        server_url
    );

    let state = AppState::from_source(source);
    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Profile
    cfg.service(crate::profile::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::get_public_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::validate_profile_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
