use axum::{
    Json, extract::Path, extract::Query, extract::State, extract::rejection::QueryRejection,
};
use tracing::warn;

use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{
    AnalyticsResponse, FilterOptionsResponse, PaginatedSchoolsResponse, School, SchoolFilterParams,
};
use super::service::SchoolService;

#[utoipa::path(
    get,
    path = "/api/schools",
    params(SchoolFilterParams),
    responses(
        (status = 200, description = "Paginated list of schools", body = PaginatedSchoolsResponse),
        (status = 400, description = "Malformed filter parameters")
    ),
    tag = "Schools"
)]
pub async fn get_schools(
    State(state): State<AppState>,
    filters: Result<Query<SchoolFilterParams>, QueryRejection>,
) -> Result<Json<PaginatedSchoolsResponse>, AppError> {
    let Query(params) = filters.map_err(|e| {
        warn!(error = %e, "Rejected school list query");
        AppError::bad_request(anyhow::anyhow!("Invalid filters"))
    })?;

    let filters = params.normalize(state.pagination_config.default_limit);
    let schools = SchoolService::get_schools(&state.db, filters).await?;
    Ok(Json(schools))
}

#[utoipa::path(
    get,
    path = "/api/schools/{id}",
    params(
        ("id" = i32, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "School details", body = School),
        (status = 404, description = "School not found")
    ),
    tag = "Schools"
)]
pub async fn get_school(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<School>, AppError> {
    let school = SchoolService::get_school_by_id(&state.db, id).await?;
    Ok(Json(school))
}

#[utoipa::path(
    get,
    path = "/api/filters",
    responses(
        (status = 200, description = "Distinct filter values per column", body = FilterOptionsResponse)
    ),
    tag = "Schools"
)]
pub async fn get_filter_options(
    State(state): State<AppState>,
) -> Result<Json<FilterOptionsResponse>, AppError> {
    let options = SchoolService::get_filter_options(&state.db).await?;
    Ok(Json(options))
}

#[utoipa::path(
    get,
    path = "/api/analytics",
    responses(
        (status = 200, description = "Catalog totals and grouped counts", body = AnalyticsResponse)
    ),
    tag = "Analytics"
)]
pub async fn get_analytics(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let analytics = SchoolService::get_analytics(&state.db).await?;
    Ok(Json(analytics))
}
