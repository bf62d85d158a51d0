//! Data models and filter normalization for the schools catalog.
//!
//! Query-string input arrives stringly-typed and full of UI artifacts
//! (empty fields, the `"all"` placeholder, numbers as text). Everything
//! is normalized into [`SchoolFilters`] here, before any SQL is built.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Placeholder the filter widgets send for "no selection".
pub const FILTER_ALL: &str = "all";

/// A school record as stored in the catalog.
///
/// The catalog is assembled from several government sources; apart from
/// `state`, every descriptive field may be missing. `data` carries the
/// raw source payload and is opaque to this service.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub id: i32,
    pub name: Option<String>,
    pub state: String,
    pub lga: Option<String>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub school_type: Option<String>,
    pub level: Option<String>,
    /// Identifier assigned by the source dataset; not guaranteed unique.
    pub school_id: Option<String>,
    pub address: Option<String>,
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub category: Option<String>,
    pub town: Option<String>,
    pub ownership: Option<String>,
    pub ownership_category: Option<String>,
}

fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    // Pagination input degrades to defaults instead of rejecting the
    // request, so parse failures become "absent".
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.and_then(|s| s.trim().parse::<i64>().ok()))
}

/// Raw query parameters for `GET /api/schools`, exactly as received.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct SchoolFilterParams {
    pub state: Option<String>,
    #[serde(rename = "type")]
    pub school_type: Option<String>,
    pub level: Option<String>,
    pub lga: Option<String>,
    /// Free-text search over school names and source identifiers
    pub search: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub limit: Option<i64>,
}

/// Canonical filter set: sentinels resolved, pagination coerced.
#[derive(Debug, Clone, Default)]
pub struct SchoolFilters {
    pub state: Option<String>,
    pub school_type: Option<String>,
    pub level: Option<String>,
    pub lga: Option<String>,
    pub search: Option<String>,
    pub page: i64,
    pub limit: i64,
}

impl SchoolFilterParams {
    /// Normalizes raw input into [`SchoolFilters`].
    ///
    /// Absent, empty, or `"all"` filter fields become unset; kept values
    /// are trimmed but case-preserved (comparison is case-insensitive at
    /// query time). `page` below 1 defaults to 1, `limit` below 1 to
    /// `default_limit`.
    pub fn normalize(self, default_limit: i64) -> SchoolFilters {
        SchoolFilters {
            state: normalize_field(self.state),
            school_type: normalize_field(self.school_type),
            level: normalize_field(self.level),
            lga: normalize_field(self.lga),
            search: normalize_field(self.search),
            page: self.page.filter(|page| *page >= 1).unwrap_or(1),
            limit: self.limit.filter(|limit| *limit >= 1).unwrap_or(default_limit),
        }
    }
}

fn normalize_field(raw: Option<String>) -> Option<String> {
    let value = raw?.trim().to_string();
    if value.is_empty() || value == FILTER_ALL {
        None
    } else {
        Some(value)
    }
}

/// One offset page of matching schools plus envelope metadata.
///
/// `total` counts every match in the store, not just this slice.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedSchoolsResponse {
    pub data: Vec<School>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

/// Distinct non-empty values per filterable column, for filter widgets.
#[derive(Debug, Serialize, ToSchema)]
pub struct FilterOptionsResponse {
    pub states: Vec<String>,
    pub types: Vec<String>,
    pub levels: Vec<String>,
    pub lgas: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GroupCount {
    pub name: String,
    pub count: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub total_schools: i64,
    pub by_state: Vec<GroupCount>,
    pub by_type: Vec<GroupCount>,
    pub by_level: Vec<GroupCount>,
}
