//! The fixed table queries.
//!
//! All export SQL is centralized here. Each table carries its own column
//! list so an empty result still produces a correct header, and a flag for
//! whether the recency cutoff applies to it.

use std::borrow::Cow;

use chrono::NaiveDateTime;

use crate::error_handling::DatabaseError;
use crate::export::rowset::Rowset;
use crate::storage::DbPool;

/// One table export: output base name, query text, and filter behavior.
#[derive(Debug)]
pub struct TableExport {
    /// Output file base name (also the source table name).
    pub name: &'static str,
    /// The unfiltered query text.
    pub sql: &'static str,
    /// Column names, in select order.
    pub columns: &'static [&'static str],
    /// Whether `--since-days` restricts this table by `created_at`.
    pub time_filtered: bool,
}

/// The six exported tables, in run order.
///
/// The two identity tables are always exported in full; the four log/event
/// tables honor the recency cutoff.
pub const TABLE_EXPORTS: &[TableExport] = &[
    TableExport {
        name: "users",
        sql: "SELECT id, email, role, created_at FROM users",
        columns: &["id", "email", "role", "created_at"],
        time_filtered: false,
    },
    TableExport {
        name: "user_profiles",
        sql: "SELECT id, user_id, role, skill_level, career_path FROM user_profiles",
        columns: &["id", "user_id", "role", "skill_level", "career_path"],
        time_filtered: false,
    },
    TableExport {
        name: "search_logs",
        sql: "SELECT id, user_id, query, created_at FROM search_logs",
        columns: &["id", "user_id", "query", "created_at"],
        time_filtered: true,
    },
    TableExport {
        name: "click_logs",
        sql: "SELECT id, user_id, course_id, event, created_at FROM click_logs",
        columns: &["id", "user_id", "course_id", "event", "created_at"],
        time_filtered: true,
    },
    TableExport {
        name: "completed_courses",
        sql: "SELECT id, user_id, course_id, completed_at FROM completed_courses",
        columns: &["id", "user_id", "course_id", "completed_at"],
        time_filtered: true,
    },
    TableExport {
        name: "in_progress",
        sql: "SELECT id, user_id, course_id, started_at, last_seen_at FROM in_progress",
        columns: &["id", "user_id", "course_id", "started_at", "last_seen_at"],
        time_filtered: true,
    },
];

/// Builds the query text for a table, with the cutoff placeholder when the
/// recency filter applies.
///
/// All four log tables filter on `created_at` regardless of which timestamp
/// columns they select.
pub(crate) fn build_sql(spec: &TableExport, with_cutoff: bool) -> Cow<'static, str> {
    if spec.time_filtered && with_cutoff {
        Cow::Owned(format!("{} WHERE created_at >= ?", spec.sql))
    } else {
        Cow::Borrowed(spec.sql)
    }
}

/// Executes a table's query and materializes the full result set.
///
/// `cutoff` only takes effect for tables marked `time_filtered`; it is bound
/// as a `DATETIME` parameter.
///
/// # Errors
///
/// Returns [`DatabaseError::SqlError`] if the query fails or a cell cannot
/// be decoded.
pub async fn fetch_table(
    pool: &DbPool,
    spec: &TableExport,
    cutoff: Option<NaiveDateTime>,
) -> Result<Rowset, DatabaseError> {
    let cutoff = cutoff.filter(|_| spec.time_filtered);
    let sql = build_sql(spec, cutoff.is_some());

    let mut query = sqlx::query(&sql);
    if let Some(cutoff) = cutoff {
        query = query.bind(cutoff);
    }

    let rows = query.fetch_all(pool.as_ref()).await?;
    Rowset::from_mysql_rows(spec.columns, &rows)
}
