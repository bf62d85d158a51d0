use ngschools_api::config::cors::CorsConfig;
use ngschools_api::config::pagination::PaginationConfig;
use ngschools_api::router::init_router;
use ngschools_api::state::AppState;
use sqlx::PgPool;

/// Builds the real application router on top of a test pool.
pub fn setup_test_app(pool: PgPool) -> axum::Router {
    let state = AppState {
        db: pool,
        cors_config: CorsConfig::default(),
        pagination_config: PaginationConfig::default(),
    };
    init_router(state)
}

/// Insertable school fixture; unset fields stay NULL.
#[derive(Default)]
pub struct SchoolFixture<'a> {
    pub name: Option<&'a str>,
    pub state: &'a str,
    pub lga: Option<&'a str>,
    pub school_type: Option<&'a str>,
    pub level: Option<&'a str>,
    pub school_id: Option<&'a str>,
}

pub async fn insert_school(pool: &PgPool, fixture: SchoolFixture<'_>) -> i32 {
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO schools (name, state, lga, type, level, school_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        "#,
    )
    .bind(fixture.name)
    .bind(fixture.state)
    .bind(fixture.lga)
    .bind(fixture.school_type)
    .bind(fixture.level)
    .bind(fixture.school_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Seeds the three-record scenario used across the integration tests:
/// two Lagos schools (Public and Private) and one unnamed Kano school.
#[allow(dead_code)]
pub async fn seed_sample_schools(pool: &PgPool) {
    insert_school(
        pool,
        SchoolFixture {
            name: Some("Saint Mary's Primary"),
            state: "Lagos",
            lga: Some("Ikeja"),
            school_type: Some("Public"),
            level: Some("Primary"),
            school_id: Some("NG-1001"),
        },
    )
    .await;
    insert_school(
        pool,
        SchoolFixture {
            name: Some("Greenfield College"),
            state: "Lagos",
            school_type: Some("Private"),
            level: Some("JSS"),
            school_id: Some("NG-1002"),
            ..Default::default()
        },
    )
    .await;
    insert_school(
        pool,
        SchoolFixture {
            name: None,
            state: "Kano",
            school_type: Some("Public"),
            ..Default::default()
        },
    )
    .await;
}
