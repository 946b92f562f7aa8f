//! HTTP handlers for catalog endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::application::handlers::{
    CatalogQueryError, GetItemHandler, GetItemQuery, ListCategoriesHandler, QueryPageHandler,
};
use crate::domain::catalog::{CategorySelection, ItemId, PageError, PageRequest};
use crate::ports::{CatalogGateway, GatewayOperation, UpstreamFetchError};

use super::dto::{CategoriesResponse, ErrorResponse, HealthResponse, ItemView, PageResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Catalog API error that implements IntoResponse.
#[derive(Debug)]
pub enum CatalogApiError {
    BadRequest(String),
    NotFound { resource: &'static str, id: String },
    Upstream(String),
}

impl IntoResponse for CatalogApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            CatalogApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            CatalogApiError::NotFound { resource, id } => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found(resource, &id))
            }
            CatalogApiError::Upstream(msg) => {
                (StatusCode::BAD_GATEWAY, ErrorResponse::upstream(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<UpstreamFetchError> for CatalogApiError {
    fn from(error: UpstreamFetchError) -> Self {
        if error.is_not_found() {
            let resource = match error.operation {
                GatewayOperation::GetCategoryMembers => "Category",
                GatewayOperation::GetItem => "Item",
                GatewayOperation::ListItems | GatewayOperation::ListCategories => "Resource",
            };
            return CatalogApiError::NotFound {
                resource,
                id: error.identifier,
            };
        }
        CatalogApiError::Upstream(error.to_string())
    }
}

impl From<QueryRejection> for CatalogApiError {
    fn from(rejection: QueryRejection) -> Self {
        CatalogApiError::BadRequest(rejection.body_text())
    }
}

impl From<PageError> for CatalogApiError {
    fn from(error: PageError) -> Self {
        CatalogApiError::BadRequest(error.to_string())
    }
}

impl From<CatalogQueryError> for CatalogApiError {
    fn from(error: CatalogQueryError) -> Self {
        match error {
            CatalogQueryError::Upstream(e) => e.into(),
            CatalogQueryError::MalformedReference(e) => CatalogApiError::Upstream(e.to_string()),
            CatalogQueryError::InvalidPage(e) => e.into(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing catalog dependencies.
#[derive(Clone)]
pub struct CatalogAppState {
    pub gateway: Arc<dyn CatalogGateway>,
    pub default_page_size: u32,
    pub max_page_size: u32,
}

impl CatalogAppState {
    pub fn new(gateway: Arc<dyn CatalogGateway>, default_page_size: u32, max_page_size: u32) -> Self {
        Self {
            gateway,
            default_page_size,
            max_page_size,
        }
    }

    pub fn query_page_handler(&self) -> QueryPageHandler {
        QueryPageHandler::new(self.gateway.clone())
    }

    pub fn get_item_handler(&self) -> GetItemHandler {
        GetItemHandler::new(self.gateway.clone())
    }

    pub fn list_categories_handler(&self) -> ListCategoriesHandler {
        ListCategoriesHandler::new(self.gateway.clone())
    }

    /// Builds a page request, applying the default and maximum page size.
    fn page_request(&self, params: ListItemsParams) -> Result<PageRequest, PageError> {
        let page_size = params.page_size.unwrap_or(self.default_page_size);
        if page_size > self.max_page_size {
            return Err(PageError::PageSizeTooLarge {
                requested: page_size,
                max: self.max_page_size,
            });
        }
        let selection = params
            .types
            .as_deref()
            .map(CategorySelection::from_query)
            .unwrap_or_default();
        PageRequest::new(selection, params.page.unwrap_or(1), page_size)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Parameters
// ════════════════════════════════════════════════════════════════════════════════

/// Query parameters for the item listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListItemsParams {
    /// Comma-separated category names.
    pub types: Option<String>,
    /// 1-indexed page; values below 1 are served as page 1.
    pub page: Option<i64>,
    pub page_size: Option<u32>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/items
///
/// Returns one page of items matching every selected category, or the plain
/// listing when no category is selected.
pub async fn list_items(
    State(state): State<CatalogAppState>,
    params: Result<Query<ListItemsParams>, QueryRejection>,
) -> Result<Json<PageResponse>, CatalogApiError> {
    let Query(params) = params?;
    let request = state.page_request(params)?;
    let selected = request.selection.names().to_vec();

    let handler = state.query_page_handler();
    let result = handler.handle(request).await?;

    Ok(Json(PageResponse::new(result, selected)))
}

/// GET /api/items/:id
pub async fn get_item(
    State(state): State<CatalogAppState>,
    Path(id_str): Path<String>,
) -> Result<Json<ItemView>, CatalogApiError> {
    let id: ItemId = id_str
        .parse()
        .map_err(|_| CatalogApiError::BadRequest("Invalid item ID format".to_string()))?;

    let handler = state.get_item_handler();
    let item = handler.handle(GetItemQuery { id }).await?;

    Ok(Json(item.into()))
}

/// GET /api/categories
pub async fn list_categories(
    State(state): State<CatalogAppState>,
) -> Result<Json<CategoriesResponse>, CatalogApiError> {
    let handler = state.list_categories_handler();
    let listing = handler.handle().await?;

    Ok(Json(listing.into()))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCatalogGateway;
    use crate::domain::catalog::MalformedReferenceError;
    use crate::ports::FetchFailure;

    fn state() -> CatalogAppState {
        let gateway = InMemoryCatalogGateway::new().with_item(1, "bulbasaur", &["grass"]);
        CatalogAppState::new(Arc::new(gateway), 24, 100)
    }

    #[test]
    fn test_page_request_defaults() {
        let request = state().page_request(ListItemsParams::default()).unwrap();
        assert_eq!(request.page(), 1);
        assert_eq!(request.page_size(), 24);
        assert!(request.selection.is_empty());
    }

    #[test]
    fn test_page_request_rejects_oversized_page() {
        let params = ListItemsParams {
            page_size: Some(101),
            ..Default::default()
        };
        let err = state().page_request(params).unwrap_err();
        assert_eq!(err, PageError::PageSizeTooLarge { requested: 101, max: 100 });
    }

    #[test]
    fn test_page_request_clamps_negative_page() {
        let params = ListItemsParams {
            types: Some("fire,flying".to_string()),
            page: Some(-3),
            page_size: Some(10),
        };
        let request = state().page_request(params).unwrap();
        assert_eq!(request.page(), 1);
        assert_eq!(request.selection.len(), 2);
    }

    #[test]
    fn test_not_found_category_maps_to_not_found() {
        let error = UpstreamFetchError::not_found(GatewayOperation::GetCategoryMembers, "shadow");
        match CatalogApiError::from(error) {
            CatalogApiError::NotFound { resource, id } => {
                assert_eq!(resource, "Category");
                assert_eq!(id, "shadow");
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_upstream_failure_maps_to_bad_gateway() {
        let error = UpstreamFetchError::new(GatewayOperation::GetItem, "6", FetchFailure::Timeout);
        let response = CatalogApiError::from(error).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_malformed_reference_maps_to_bad_gateway() {
        let error = CatalogQueryError::from(MalformedReferenceError::new("https://x/pokemon/abc/"));
        let response = CatalogApiError::from(error).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
