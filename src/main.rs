use axum::Router;
use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bibliocatalog::gutendex::GutendexClient;
use bibliocatalog::infrastructure::AppState;
use bibliocatalog::{api, config, db};

/// Find an available port starting from the preferred port
fn find_available_port(preferred_port: u16) -> Option<u16> {
    if TcpListener::bind(("0.0.0.0", preferred_port)).is_ok() {
        return Some(preferred_port);
    }

    // Scan next 100 ports
    (preferred_port.saturating_add(1)..preferred_port.saturating_add(100))
        .find(|&port| TcpListener::bind(("0.0.0.0", port)).is_ok())
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bibliocatalog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();

    // Check for --profile CLI argument
    let args: Vec<String> = std::env::args().collect();
    let profile = args
        .iter()
        .position(|arg| arg == "--profile")
        .and_then(|pos| args.get(pos + 1).cloned());

    let config = config::Config::from_env(profile);
    tracing::info!(
        "Starting with profile '{}' (database: {})",
        config.profile,
        config.database_url
    );

    // Initialize database
    let db = db::init_db(&config.database_url)
        .await
        .expect("Failed to initialize database");

    let client = GutendexClient::new(&config.gutendex_url, config.http_timeout)
        .expect("Failed to build Gutendex client");
    tracing::info!("Using Gutendex at {}", config.gutendex_url);

    // Build API router
    let state = AppState::new(db, Arc::new(client));
    let api_router = api::api_router(state);

    // Swagger UI
    use bibliocatalog::api_docs::ApiDoc;
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    let mut cors_allowed_origins = Vec::new();
    for origin in &config.cors_allowed_origins {
        match origin.parse::<axum::http::HeaderValue>() {
            Ok(v) => cors_allowed_origins.push(v),
            Err(e) => tracing::error!("Failed to parse CORS origin '{}': {}", origin, e),
        }
    }

    let app = Router::new()
        .merge(SwaggerUi::new("/api/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api_router)
        .layer(TraceLayer::new_for_http())
        // CORS
        .layer(
            CorsLayer::new()
                .allow_origin(cors_allowed_origins)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Find available port
    let port = find_available_port(config.port).expect("Failed to find available port");

    if port != config.port {
        tracing::warn!(
            "Preferred port {} was not available, using port {} instead",
            config.port,
            port
        );
    }

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("BiblioCatalog server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_available_port_at_top_of_range() {
        // Nothing above 65535 to scan
        let port = find_available_port(u16::MAX);
        assert!(matches!(port, None | Some(u16::MAX)));
    }

    #[test]
    fn test_find_available_port_skips_bound_port() {
        let taken = TcpListener::bind(("0.0.0.0", 0)).unwrap();
        let busy = taken.local_addr().unwrap().port();

        let port = find_available_port(busy).unwrap();
        assert_ne!(port, busy);
        assert!(port > busy);
    }
}
