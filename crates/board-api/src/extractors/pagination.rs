//! Pagination extractor
//!
//! Extracts page-number pagination from query strings. The page size is
//! server-side configuration, not caller input.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Page number used when the query string omits one
const DEFAULT_PAGE: i64 = 1;

/// Raw pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    /// 1-based page number
    #[serde(default)]
    pub page: Option<i64>,
}

/// Validated pagination parameters
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    /// 1-based page number (validated to >= 1)
    pub page: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: DEFAULT_PAGE }
    }
}

impl Pagination {
    /// Row offset of this page for a given page size
    pub fn offset(&self, page_size: i64) -> i64 {
        (self.page - 1) * page_size
    }

    /// Check whether this is the cache-merged first page
    pub fn is_first_page(&self) -> bool {
        self.page == 1
    }
}

impl TryFrom<PaginationParams> for Pagination {
    type Error = ApiError;

    fn try_from(params: PaginationParams) -> Result<Self, Self::Error> {
        let page = params.page.unwrap_or(DEFAULT_PAGE);
        if page < 1 {
            return Err(ApiError::invalid_query("Page number must be at least 1"));
        }
        Ok(Pagination { page })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Pagination::try_from(params)
    }
}
