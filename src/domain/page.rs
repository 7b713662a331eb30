//! Backend envelopes and list parameters.
//!
//! Two wrappers come back from the backend: [`ApiEnvelope`], the uniform
//! `{success, message, data, errors, timestamp}` response shape, and
//! [`Page`], the paginated list shape. Stores keep the page metadata as a
//! [`Pagination`] and the content as their primary list.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default page size for list requests.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Uniform response envelope used by the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// A page of results as returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub first: bool,
    pub last: bool,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    /// The page metadata without its content.
    #[must_use]
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            first: self.first,
            last: self.last,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }

    /// Split into content and metadata.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, Pagination) {
        let pagination = self.pagination();
        (self.content, pagination)
    }
}

/// Page metadata mirrored verbatim from the most recent list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub first: bool,
    pub last: bool,
    pub has_next: bool,
    pub has_previous: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            total_elements: 0,
            total_pages: 0,
            first: true,
            last: true,
            has_next: false,
            has_previous: false,
        }
    }
}

/// Sort direction for list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for SortDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDir::Asc => write!(f, "asc"),
            SortDir::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SortDir {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDir::Asc),
            "desc" => Ok(SortDir::Desc),
            other => Err(format!("unknown sort direction '{other}'")),
        }
    }
}

/// Parameters for a paged list request.
///
/// `sort_by` left as `None` means the resource's natural name field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub page: u32,
    pub size: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_dir: SortDir,
    pub search: Option<String>,
}

impl ListParams {
    #[must_use]
    pub fn page(page: u32, size: u32) -> Self {
        Self {
            page,
            size: Some(size),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    #[must_use]
    pub fn sorted(mut self, field: impl Into<String>, dir: SortDir) -> Self {
        self.sort_by = Some(field.into());
        self.sort_dir = dir;
        self
    }

    /// Query pairs for a sorted list endpoint.
    ///
    /// A blank search term is left out entirely.
    #[must_use]
    pub fn query(&self, default_sort: &str) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("page", self.page.to_string()),
            ("size", self.size.unwrap_or(DEFAULT_PAGE_SIZE).to_string()),
            (
                "sortBy",
                self.sort_by.clone().unwrap_or_else(|| default_sort.to_string()),
            ),
            ("sortDir", self.sort_dir.to_string()),
        ];
        if let Some(term) = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            query.push(("search", term.to_string()));
        }
        query
    }
}

/// Query pairs for endpoints that only take `page` and `size`.
#[must_use]
pub fn page_query(page: u32, size: Option<u32>) -> Vec<(&'static str, String)> {
    vec![
        ("page", page.to_string()),
        ("size", size.unwrap_or(DEFAULT_PAGE_SIZE).to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_uses_documented_defaults() {
        let query = ListParams::default().query("sessionName");
        assert_eq!(
            query,
            vec![
                ("page", "0".to_string()),
                ("size", "10".to_string()),
                ("sortBy", "sessionName".to_string()),
                ("sortDir", "asc".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_includes_search_only_when_non_blank() {
        let query = ListParams::page(2, 25).with_search("  ").query("className");
        assert!(query.iter().all(|(k, _)| *k != "search"));

        let query = ListParams::page(2, 25)
            .sorted("createdAt", SortDir::Desc)
            .with_search("2024")
            .query("className");
        assert!(query.contains(&("sortBy", "createdAt".to_string())));
        assert!(query.contains(&("sortDir", "desc".to_string())));
        assert!(query.contains(&("search", "2024".to_string())));
    }

    #[test]
    fn test_page_deserializes_backend_envelope() {
        let json = r#"{
            "content": [1, 2, 3],
            "page": 0,
            "size": 10,
            "totalElements": 3,
            "totalPages": 1,
            "first": true,
            "last": true,
            "hasNext": false,
            "hasPrevious": false
        }"#;

        let page: Page<u32> = serde_json::from_str(json).unwrap();
        let (content, pagination) = page.into_parts();
        assert_eq!(content, vec![1, 2, 3]);
        assert_eq!(pagination.total_pages, 1);
        assert!(!pagination.has_next);
    }

    #[test]
    fn test_sort_dir_parse() {
        assert_eq!("DESC".parse::<SortDir>().unwrap(), SortDir::Desc);
        assert!("sideways".parse::<SortDir>().is_err());
    }
}
