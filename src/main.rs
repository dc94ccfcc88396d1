//! Portfolio Backend
//!
//! REST backend for a personal portfolio site with an in-memory content store
//! and a password-gated admin mode for editing it.

mod api;
mod auth;
mod config;
mod editor;
mod errors;
mod models;
mod notice;
mod store;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::AdminSession;
use config::Config;
use models::{Achievement, Certificate, ContactMessage, Education, Experience, Project, Skill};
use store::PortfolioStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PortfolioStore>,
    pub session: Arc<AdminSession>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Fresh seeded store and a logged-out admin session.
    pub fn new(config: Config) -> Self {
        Self {
            store: Arc::new(PortfolioStore::seeded()),
            session: Arc::new(AdminSession::with_password(config.admin_password.clone())),
            config: Arc::new(config),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Portfolio Backend");
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Contact delay: {:?}", config.contact_delay);

    if config.admin_password == config::DEFAULT_ADMIN_PASSWORD {
        tracing::warn!(
            "Using the default admin password. Set PORTFOLIO_ADMIN_PASSWORD to change it."
        );
    }

    let bind_addr = config.bind_addr;
    let state = AppState::new(config);

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone the session for the admin gate
    let session = state.session.clone();

    // Read-only site content, the contact form and the login flow
    let public_routes = Router::new()
        // Whole site
        .route("/portfolio", get(api::get_portfolio))
        .route("/portfolio/revision", get(api::get_revision))
        .route("/about", get(api::get_about))
        .route("/social", get(api::get_social))
        // Collections
        .route("/projects", get(api::list_projects))
        .route("/projects/{id}", get(api::get_record::<Project>))
        .route("/certificates", get(api::list_records::<Certificate>))
        .route("/certificates/{id}", get(api::get_record::<Certificate>))
        .route("/experiences", get(api::list_records::<Experience>))
        .route("/experiences/{id}", get(api::get_record::<Experience>))
        .route("/skills", get(api::list_skills))
        .route("/skills/{id}", get(api::get_record::<Skill>))
        .route("/achievements", get(api::list_records::<Achievement>))
        .route("/achievements/{id}", get(api::get_record::<Achievement>))
        .route("/education", get(api::list_records::<Education>))
        .route("/education/{id}", get(api::get_record::<Education>))
        // Contact
        .route("/contact", post(api::submit_contact))
        // Session
        .route("/admin/login", post(api::login))
        .route("/admin/logout", post(api::logout))
        .route("/admin/session", get(api::get_session));

    // Everything that changes content
    let admin_routes = Router::new()
        // Projects
        .route("/projects", post(api::create_record::<Project>))
        .route("/projects/{id}", put(api::update_record::<Project>))
        .route("/projects/{id}", delete(api::delete_record::<Project>))
        // Certificates
        .route("/certificates", post(api::create_record::<Certificate>))
        .route("/certificates/{id}", put(api::update_record::<Certificate>))
        .route("/certificates/{id}", delete(api::delete_record::<Certificate>))
        // Experiences
        .route("/experiences", post(api::create_record::<Experience>))
        .route("/experiences/{id}", put(api::update_record::<Experience>))
        .route("/experiences/{id}", delete(api::delete_record::<Experience>))
        // Skills
        .route("/skills", post(api::create_record::<Skill>))
        .route("/skills/{id}", put(api::update_record::<Skill>))
        .route("/skills/{id}", delete(api::delete_record::<Skill>))
        .route("/skills/{id}/visibility", post(api::toggle_skill_visibility))
        // Achievements
        .route("/achievements", post(api::create_record::<Achievement>))
        .route("/achievements/{id}", put(api::update_record::<Achievement>))
        .route("/achievements/{id}", delete(api::delete_record::<Achievement>))
        // Education
        .route("/education", post(api::create_record::<Education>))
        .route("/education/{id}", put(api::update_record::<Education>))
        .route("/education/{id}", delete(api::delete_record::<Education>))
        // Inbox
        .route("/messages", get(api::list_records::<ContactMessage>))
        .route("/messages/{id}", put(api::update_record::<ContactMessage>))
        .route("/messages/{id}", delete(api::delete_record::<ContactMessage>))
        .route("/messages/{id}/read", post(api::mark_message_read))
        // Admin tools
        .route("/admin/dashboard", get(api::get_dashboard))
        .route("/admin/reset", post(api::reset_portfolio))
        // Apply admin gate middleware
        .layer(middleware::from_fn(move |req, next| {
            auth::admin_gate_layer(session.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", public_routes.merge(admin_routes))
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
