//! `/api/books` handlers

use crate::error::ErrorResponse;
use crate::state::AppState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use mockshelf_core::types::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use mockshelf_core::{AppError, Book, BookId, CatalogGateway, PageRequest, PageResult};
use std::num::IntErrorKind;

/// Raw listing parameters, kept as text so bad numbers get our own message
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub search: Option<String>,
}

impl ListParams {
    /// Collects the listing parameters from decoded query pairs
    ///
    /// When a key repeats, its first value is used. Unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut params.page,
                "page_size" => &mut params.page_size,
                "search" => &mut params.search,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Applies defaults and checks that page and page_size are positive integers
    pub fn into_request(self) -> Result<PageRequest, AppError> {
        let page = parse_positive("page", self.page.as_deref(), DEFAULT_PAGE)?;
        let page_size = parse_positive("page_size", self.page_size.as_deref(), DEFAULT_PAGE_SIZE)?;
        Ok(PageRequest::new(
            page,
            page_size,
            self.search.unwrap_or_default(),
        ))
    }
}

/// Parses an optional query value; absent or blank means `default`
///
/// Accepted values are 1..=`u32::MAX` so the response can echo them exactly.
fn parse_positive(param: &str, raw: Option<&str>, default: u32) -> Result<u32, AppError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(default),
        Some(raw) => raw,
    };

    let value: i64 = raw.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => AppError::too_large(param, u32::MAX),
        IntErrorKind::NegOverflow => AppError::not_positive(param),
        _ => AppError::not_an_integer(param),
    })?;
    if value < 1 {
        return Err(AppError::not_positive(param));
    }
    u32::try_from(value).map_err(|_| AppError::too_large(param, u32::MAX))
}

/// `GET /api/books/{id}`
pub async fn get_book<G>(
    State(state): State<AppState<G>>,
    Path(id): Path<String>,
) -> Result<Json<Book>, ErrorResponse>
where
    G: CatalogGateway + 'static,
{
    let id: BookId = id
        .parse()
        .map_err(|_| state.reject(&AppError::not_an_integer("id")))?;

    match state.service.get_by_id(id).await {
        Ok(book) => Ok(Json(book)),
        Err(e) => Err(state.reject(&e)),
    }
}

/// `GET /api/books?page&page_size&search`
pub async fn list_books<G>(
    State(state): State<AppState<G>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<PageResult<Book>>, ErrorResponse>
where
    G: CatalogGateway + 'static,
{
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            log::debug!("Rejected query string: {}", rejection.body_text());
            return Err(state.reject(&AppError::malformed_query()));
        }
    };

    let request = ListParams::from_pairs(pairs)
        .into_request()
        .map_err(|e| state.reject(&e))?;

    state
        .service
        .get_page(&request)
        .await
        .map(Json)
        .map_err(|e| state.reject(&e))
}
