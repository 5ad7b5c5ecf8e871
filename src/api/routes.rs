// src/api/routes.rs
use actix_web::web;
use super::handlers;

/// Simulation endpoints, as listed by the status endpoint.
pub const SIMULATION_ENDPOINTS: &[&str] = &[
    "/api/osint/darkweb",
    "/api/osint/dns",
    "/api/osint/email",
    "/api/osint/metadata",
    "/api/osint/social",
    "/api/osint/whois",
    "/api/scan/url",
];

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // OSINT simulation routes
    cfg.service(
        web::scope("/api/osint")
            .route("/darkweb", web::post().to(handlers::osint::check_darkweb))
            .route("/dns", web::post().to(handlers::osint::lookup_dns))
            .route("/email", web::post().to(handlers::osint::harvest_emails))
            .route("/metadata", web::post().to(handlers::osint::analyze_metadata))
            .route("/social", web::post().to(handlers::osint::find_profiles))
            .route("/whois", web::post().to(handlers::osint::lookup_whois))
    );

    // Scan routes
    cfg.service(
        web::scope("/api/scan")
            .route("/url", web::post().to(handlers::scan::check_url))
    );

    // System routes
    cfg.service(
        web::scope("/api/system")
            .route("/status", web::get().to(handlers::system::get_status))
            .route("/logs", web::get().to(handlers::system::get_logs))
    );
}
