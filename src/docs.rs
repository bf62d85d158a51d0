use utoipa::OpenApi;

use crate::modules::schools::model::{
    AnalyticsResponse, FilterOptionsResponse, GroupCount, PaginatedSchoolsResponse, School,
    SchoolFilterParams,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::schools::controller::get_schools,
        crate::modules::schools::controller::get_school,
        crate::modules::schools::controller::get_filter_options,
        crate::modules::schools::controller::get_analytics,
        crate::router::health_check,
    ),
    components(
        schemas(
            School,
            SchoolFilterParams,
            PaginatedSchoolsResponse,
            FilterOptionsResponse,
            AnalyticsResponse,
            GroupCount,
        )
    ),
    tags(
        (name = "Schools", description = "Catalog search and lookup endpoints"),
        (name = "Analytics", description = "Catalog summary statistics"),
        (name = "Health", description = "Service health check")
    ),
    info(
        title = "NGSchools API",
        version = "0.1.0",
        description = "A read-only REST API for browsing the Nigerian schools catalog: filtered search, pagination, filter discovery, and grouped-count analytics.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
