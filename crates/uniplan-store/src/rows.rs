//! Private row shapes decoded straight from query results.

use uniplan_core_types::Employee;

/// Full employee row from the `employees` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct EmployeeRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub degree: Option<String>,
    pub rank: Option<String>,
    pub photo_link: Option<String>,
    pub calendar_id: Option<String>,
    pub url_id: String,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            middle_name: row.middle_name,
            degree: row.degree,
            rank: row.rank,
            photo_link: row.photo_link,
            calendar_id: row.calendar_id,
            url_id: row.url_id,
        }
    }
}

/// Columns the employee queries project, kept in one place so the search
/// and directory queries stay in sync.
pub(crate) const EMPLOYEE_COLUMNS: &str =
    r#"id, first_name, last_name, middle_name, degree, "rank", photo_link, calendar_id, url_id"#;
