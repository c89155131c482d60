//! Route table and host mounting

use crate::handlers::{get_book, healthz, list_books};
use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use mockshelf_catalog::{CatalogService, ErrorClassifier};
use mockshelf_core::{AppError, CatalogGateway};
use std::path::{Path, PathBuf};
use tower_http::services::ServeDir;

/// How [`mount`] wires the catalog into a host router
#[derive(Debug, Clone, Default)]
pub struct MountOptions {
    /// Directory served under `/static`; `None` skips static assets
    pub static_dir: Option<PathBuf>,
    pub classifier: ErrorClassifier,
}

impl MountOptions {
    pub fn new(classifier: ErrorClassifier) -> Self {
        Self {
            static_dir: None,
            classifier,
        }
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }
}

/// The catalog API plus `/healthz`
pub fn routes<G>(state: AppState<G>) -> Router
where
    G: CatalogGateway + 'static,
{
    Router::new()
        .route("/api/books", get(list_books::<G>))
        .route("/api/books/{id}", get(get_book::<G>))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Files under `dir` served at `/static/*`
pub fn static_routes(dir: impl AsRef<Path>) -> Router {
    Router::new().nest_service("/static", ServeDir::new(dir.as_ref()))
}

/// Seeds `gateway` and adds the catalog routes to `host`
///
/// Seeding happens before any route is registered. If it fails the error is
/// returned and `host` is dropped untouched, so a host can refuse to start.
pub async fn mount<G>(host: Router, gateway: G, options: MountOptions) -> Result<Router, AppError>
where
    G: CatalogGateway + 'static,
{
    let service = CatalogService::new(gateway);
    let outcome = service.seed().await?;
    log::info!(
        "Catalog ready with {} books (mode: {})",
        outcome.item_count(),
        options.classifier.mode()
    );

    let mut router = host.merge(routes(AppState::new(service, options.classifier)));
    if let Some(dir) = options.static_dir {
        log::debug!("Serving static files from {}", dir.display());
        router = router.merge(static_routes(dir));
    }
    Ok(router)
}
