use sqlx::PgPool;
use tracing::{debug, error, info, instrument};

use crate::utils::errors::AppError;
use crate::utils::pagination::{offset, total_pages};

use super::model::{
    AnalyticsResponse, FilterOptionsResponse, GroupCount, PaginatedSchoolsResponse, School,
    SchoolFilters,
};
use super::query::{FilterColumn, build_predicate};

const SELECT_SCHOOL: &str = "SELECT id, name, state, lga, type, level, school_id, address, data, \
     latitude, longitude, category, town, ownership, ownership_category \
     FROM schools WHERE 1=1";

/// Label reported for rows whose grouping column is null or empty.
const UNKNOWN_LABEL: &str = "Unknown";

pub struct SchoolService;

impl SchoolService {
    #[instrument(skip(db, filters), fields(db.operation = "SELECT", db.table = "schools"))]
    pub async fn get_schools(
        db: &PgPool,
        filters: SchoolFilters,
    ) -> Result<PaginatedSchoolsResponse, AppError> {
        let page = filters.page;
        let limit = filters.limit;
        let offset = offset(page, limit);

        debug!(
            page = %page,
            limit = %limit,
            filter.state = ?filters.state,
            filter.school_type = ?filters.school_type,
            filter.level = ?filters.level,
            filter.lga = ?filters.lga,
            filter.search = ?filters.search,
            "Fetching schools with filters"
        );

        let predicate = build_predicate(&filters);

        let mut count_query = String::from("SELECT COUNT(*) FROM schools WHERE 1=1");
        count_query.push_str(&predicate.where_sql);

        let mut count_sql = sqlx::query_scalar::<_, i64>(&count_query);
        for param in &predicate.params {
            count_sql = count_sql.bind(param);
        }
        let total = count_sql.fetch_one(db).await.map_err(|e| {
            error!(error = %e, "Database error counting schools");
            AppError::from(e)
        })?;

        let mut data_query = String::from(SELECT_SCHOOL);
        data_query.push_str(&predicate.where_sql);
        data_query.push_str(" ORDER BY id");
        data_query.push_str(&format!(" LIMIT {} OFFSET {}", limit, offset));

        let mut data_sql = sqlx::query_as::<_, School>(&data_query);
        for param in &predicate.params {
            data_sql = data_sql.bind(param);
        }
        let schools = data_sql.fetch_all(db).await.map_err(|e| {
            error!(error = %e, "Database error fetching schools");
            AppError::from(e)
        })?;

        debug!(
            total = %total,
            returned = %schools.len(),
            "Schools fetched successfully"
        );

        Ok(PaginatedSchoolsResponse {
            data: schools,
            total,
            page,
            limit,
            total_pages: total_pages(total, limit),
        })
    }

    #[instrument(skip(db), fields(school.id = %school_id, db.operation = "SELECT", db.table = "schools"))]
    pub async fn get_school_by_id(db: &PgPool, school_id: i32) -> Result<School, AppError> {
        debug!("Fetching school by ID");

        let query = format!("{SELECT_SCHOOL} AND id = $1");
        let school = sqlx::query_as::<_, School>(&query)
            .bind(school_id)
            .fetch_optional(db)
            .await
            .map_err(|e| {
                error!(school.id = %school_id, error = %e, "Database error fetching school");
                AppError::from(e)
            })?
            .ok_or_else(|| {
                debug!(school.id = %school_id, "School not found");
                AppError::not_found(anyhow::anyhow!("School not found"))
            })?;

        Ok(school)
    }

    /// Distinct values for every filterable column, over the whole
    /// catalog. Never narrowed by an applied filter.
    #[instrument(skip(db), fields(db.operation = "SELECT DISTINCT", db.table = "schools"))]
    pub async fn get_filter_options(db: &PgPool) -> Result<FilterOptionsResponse, AppError> {
        debug!("Fetching filter options");

        Ok(FilterOptionsResponse {
            states: Self::distinct_values(db, FilterColumn::State).await?,
            types: Self::distinct_values(db, FilterColumn::Type).await?,
            levels: Self::distinct_values(db, FilterColumn::Level).await?,
            lgas: Self::distinct_values(db, FilterColumn::Lga).await?,
        })
    }

    async fn distinct_values(db: &PgPool, column: FilterColumn) -> Result<Vec<String>, AppError> {
        let col = column.as_sql();
        let query = format!(
            "SELECT DISTINCT {col} FROM schools \
             WHERE {col} IS NOT NULL AND {col} <> '' ORDER BY {col}"
        );

        sqlx::query_scalar::<_, String>(&query)
            .fetch_all(db)
            .await
            .map_err(|e| {
                error!(column = %col, error = %e, "Database error fetching distinct values");
                AppError::from(e)
            })
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "schools"))]
    pub async fn get_analytics(db: &PgPool) -> Result<AnalyticsResponse, AppError> {
        debug!("Computing catalog analytics");

        let total_schools = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM schools")
            .fetch_one(db)
            .await
            .map_err(|e| {
                error!(error = %e, "Database error counting schools");
                AppError::from(e)
            })?;

        let by_state = Self::grouped_counts(db, FilterColumn::State).await?;
        let by_type = Self::grouped_counts(db, FilterColumn::Type).await?;
        let by_level = Self::grouped_counts(db, FilterColumn::Level).await?;

        info!(total_schools = %total_schools, "Analytics computed");

        Ok(AnalyticsResponse {
            total_schools,
            by_state,
            by_type,
            by_level,
        })
    }

    /// Per-value counts for one column. Rows with a null or empty value
    /// count under [`UNKNOWN_LABEL`] rather than disappearing, so each
    /// grouping sums to the catalog total. `NULLIF` folds empty strings
    /// into the null group so "Unknown" appears at most once.
    async fn grouped_counts(db: &PgPool, column: FilterColumn) -> Result<Vec<GroupCount>, AppError> {
        let col = column.as_sql();
        let query = format!(
            "SELECT NULLIF({col}, ''), COUNT(*) FROM schools \
             GROUP BY NULLIF({col}, '') ORDER BY COUNT(*) DESC, NULLIF({col}, '') ASC"
        );

        let rows = sqlx::query_as::<_, (Option<String>, i64)>(&query)
            .fetch_all(db)
            .await
            .map_err(|e| {
                error!(column = %col, error = %e, "Database error fetching grouped counts");
                AppError::from(e)
            })?;

        Ok(rows
            .into_iter()
            .map(|(label, count)| GroupCount {
                name: label.unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
                count,
            })
            .collect())
    }
}
