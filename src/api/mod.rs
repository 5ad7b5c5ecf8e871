// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};
use crate::core::AppState;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // OSINT endpoints
        crate::api::handlers::osint::check_darkweb,
        crate::api::handlers::osint::lookup_dns,
        crate::api::handlers::osint::harvest_emails,
        crate::api::handlers::osint::analyze_metadata,
        crate::api::handlers::osint::find_profiles,
        crate::api::handlers::osint::lookup_whois,

        // Scan endpoints
        crate::api::handlers::scan::check_url,

        // System endpoints
        crate::api::handlers::system::get_status,
        crate::api::handlers::system::get_logs
    ),
    components(
        schemas(
            // Request/response schemas
            crate::api::types::EmailRequest,
            crate::api::types::DomainRequest,
            crate::api::types::UsernameRequest,
            crate::api::types::MetadataRequest,
            crate::api::types::UrlRequest,
            crate::api::types::ErrorResponse,
            crate::api::types::LogListResponse,

            // Report schemas
            crate::osint::HashStrategy,
            crate::osint::darkweb::DarkwebReport,
            crate::osint::darkweb::Breach,
            crate::osint::darkweb::BreachStatus,
            crate::osint::darkweb::Severity,
            crate::osint::dns::DnsReport,
            crate::osint::dns::DnsRecord,
            crate::osint::dns::RecordType,
            crate::osint::email::EmailReport,
            crate::osint::email::HarvestedEmail,
            crate::osint::email::VerificationSource,
            crate::osint::metadata::MetadataReport,
            crate::osint::metadata::RiskLevel,
            crate::osint::social::SocialReport,
            crate::osint::social::SocialProfile,
            crate::osint::social::ExposureLevel,
            crate::osint::whois::WhoisResponse,
            crate::osint::whois::WhoisRecord,
            crate::osint::whois::NameServers,
            crate::scan::UrlCheckReport,
            crate::scan::UrlStatus,

            // System schemas
            crate::system::SystemStatus,
            crate::logging::LogEntry,
            crate::logging::LogLevel
        )
    ),
    tags(
        (name = "OSINT", description = "Simulated open-source intelligence lookups"),
        (name = "Scan", description = "Offline URL reputation checks"),
        (name = "System", description = "Service status and activity logs")
    ),
    info(
        title = "CyberScan Simulator API",
        version = "0.1.0",
        description = "Deterministic, offline OSINT simulations for security training",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub async fn start_server(state: AppState) -> std::io::Result<()> {
    let (address, port) = state.config.bind_address();
    let workers = state.config.workers;
    let cors_max_age = state.config.cors_max_age;

    log::info!("Starting CyberScan API server on {}:{}", address, port);
    log::info!("API docs at http://{}:{}/swagger-ui/", address, port);

    let state = web::Data::new(state);

    let server = HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                "Content-Type",
                "Accept",
                "X-Requested-With",
            ])
            .expose_headers(vec!["X-Request-Id"])
            .max_age(cors_max_age);

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    });

    let server = match workers {
        Some(workers) => server.workers(workers),
        None => server,
    };

    server.bind((address.as_str(), port))?
        .run()
        .await
}

pub mod error;
pub mod types;
pub mod routes;
pub mod handlers;
