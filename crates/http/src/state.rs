//! Shared handler state

use crate::error::ErrorResponse;
use mockshelf_catalog::{CatalogService, ErrorClassifier};
use mockshelf_core::AppError;

/// Everything a request handler needs, cloned per request
#[derive(Debug)]
pub struct AppState<G> {
    pub service: CatalogService<G>,
    pub classifier: ErrorClassifier,
}

impl<G> Clone for AppState<G> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            classifier: self.classifier,
        }
    }
}

impl<G> AppState<G> {
    pub fn new(service: CatalogService<G>, classifier: ErrorClassifier) -> Self {
        Self {
            service,
            classifier,
        }
    }

    /// Turns a failure into the response the client sees
    pub fn reject(&self, err: &AppError) -> ErrorResponse {
        ErrorResponse(self.classifier.classify(err))
    }
}
