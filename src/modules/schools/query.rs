//! SQL predicate construction over the `schools` table.

use super::model::SchoolFilters;

/// Columns exposed to filter widgets and analytics groupings.
///
/// A closed enum keeps user input out of SQL identifiers; filter values
/// only ever reach queries as bind parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterColumn {
    State,
    Type,
    Level,
    Lga,
}

impl FilterColumn {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::State => "state",
            Self::Type => "type",
            Self::Level => "level",
            Self::Lga => "lga",
        }
    }
}

/// Conjunctive WHERE fragment plus its ordered bind parameters.
///
/// The fragment is appended to queries that start with `WHERE 1=1`; an
/// empty fragment matches every record.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SchoolPredicate {
    pub where_sql: String,
    pub params: Vec<String>,
}

/// Builds the predicate for a canonical filter set.
///
/// Exact-match fields use `ILIKE` without wildcards, a case-insensitive
/// full-value comparison. The search term matches as a substring of the
/// name or the source identifier; its pattern is bound once and
/// referenced from both sides of the OR.
pub fn build_predicate(filters: &SchoolFilters) -> SchoolPredicate {
    let mut predicate = SchoolPredicate::default();

    let exact_terms = [
        (FilterColumn::State, &filters.state),
        (FilterColumn::Type, &filters.school_type),
        (FilterColumn::Level, &filters.level),
        (FilterColumn::Lga, &filters.lga),
    ];

    for (column, value) in exact_terms {
        if let Some(value) = value {
            predicate.params.push(value.clone());
            predicate.where_sql.push_str(&format!(
                " AND {} ILIKE ${}",
                column.as_sql(),
                predicate.params.len()
            ));
        }
    }

    if let Some(search) = &filters.search {
        predicate.params.push(format!("%{}%", search));
        let n = predicate.params.len();
        predicate
            .where_sql
            .push_str(&format!(" AND (name ILIKE ${n} OR school_id ILIKE ${n})"));
    }

    predicate
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters() -> SchoolFilters {
        SchoolFilters {
            page: 1,
            limit: 20,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_filters_is_universal_predicate() {
        let predicate = build_predicate(&filters());
        assert_eq!(predicate.where_sql, "");
        assert!(predicate.params.is_empty());
    }

    #[test]
    fn test_single_exact_term() {
        let predicate = build_predicate(&SchoolFilters {
            state: Some("Lagos".to_string()),
            ..filters()
        });
        assert_eq!(predicate.where_sql, " AND state ILIKE $1");
        assert_eq!(predicate.params, vec!["Lagos".to_string()]);
    }

    #[test]
    fn test_all_exact_terms_are_conjoined_in_order() {
        let predicate = build_predicate(&SchoolFilters {
            state: Some("Kano".to_string()),
            school_type: Some("Public".to_string()),
            level: Some("JSS".to_string()),
            lga: Some("Nassarawa".to_string()),
            ..filters()
        });
        assert_eq!(
            predicate.where_sql,
            " AND state ILIKE $1 AND type ILIKE $2 AND level ILIKE $3 AND lga ILIKE $4"
        );
        assert_eq!(predicate.params.len(), 4);
    }

    #[test]
    fn test_search_term_binds_once_for_both_columns() {
        let predicate = build_predicate(&SchoolFilters {
            search: Some("mary".to_string()),
            ..filters()
        });
        assert_eq!(
            predicate.where_sql,
            " AND (name ILIKE $1 OR school_id ILIKE $1)"
        );
        assert_eq!(predicate.params, vec!["%mary%".to_string()]);
    }

    #[test]
    fn test_exact_and_search_terms_combine() {
        let predicate = build_predicate(&SchoolFilters {
            state: Some("Lagos".to_string()),
            search: Some("college".to_string()),
            ..filters()
        });
        assert_eq!(
            predicate.where_sql,
            " AND state ILIKE $1 AND (name ILIKE $2 OR school_id ILIKE $2)"
        );
        assert_eq!(
            predicate.params,
            vec!["Lagos".to_string(), "%college%".to_string()]
        );
    }

    #[test]
    fn test_filter_column_sql_names() {
        assert_eq!(FilterColumn::State.as_sql(), "state");
        assert_eq!(FilterColumn::Type.as_sql(), "type");
        assert_eq!(FilterColumn::Level.as_sql(), "level");
        assert_eq!(FilterColumn::Lga.as_sql(), "lga");
    }
}
