//! Directory listings: faculties, departments, specialities, groups,
//! employees and auditories. Single unconditioned queries with optional
//! parent filters, returned as typed records.

use serde::Serialize;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uniplan_core_types::Employee;
use uniplan_errors::Result;

use crate::errors::from_sqlx;
use crate::rows::{EmployeeRow, EMPLOYEE_COLUMNS};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Faculty {
    pub id: i64,
    pub name: String,
    pub abbr: String,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub abbr: String,
    pub url_id: String,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Speciality {
    pub id: i64,
    pub name: String,
    pub abbr: String,
    pub code: String,
    pub education_form: String,
    pub faculty_id: i64,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct StudentGroup {
    pub id: i64,
    pub name: String,
    pub course: Option<i32>,
    pub education_degree: i32,
    pub number_of_students: Option<i32>,
    pub specialty_id: i64,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Auditory {
    pub id: i64,
    pub name: String,
    pub building_number: Option<String>,
    pub note: Option<String>,
    pub capacity: Option<i32>,
    pub auditory_type: Option<String>,
    pub department_id: Option<i64>,
}

/// One group's detail joined with its speciality and faculty.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct GroupInfo {
    pub name: String,
    pub course: Option<i32>,
    pub education_degree: i32,
    pub number_of_students: Option<i32>,
    pub speciality: String,
    pub speciality_code: String,
    pub education_form: String,
    pub faculty: String,
    pub faculty_abbr: String,
}

#[derive(Clone)]
pub struct StructureRepo {
    pool: PgPool,
}

impl StructureRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn faculties(&self) -> Result<Vec<Faculty>> {
        sqlx::query_as("SELECT id, name, abbr FROM faculties ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(from_sqlx("faculties_list"))
    }

    pub async fn departments(&self) -> Result<Vec<Department>> {
        sqlx::query_as("SELECT id, name, abbr, url_id FROM departments ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(from_sqlx("departments_list"))
    }

    pub async fn specialities(&self, faculty_id: Option<i64>) -> Result<Vec<Speciality>> {
        let mut query: QueryBuilder<'_, Postgres> = QueryBuilder::new(
            "SELECT id, name, abbr, code, education_form, faculty_id FROM specialities",
        );
        if let Some(faculty_id) = faculty_id {
            query.push(" WHERE faculty_id = ").push_bind(faculty_id);
        }
        query.push(" ORDER BY id");
        query
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(from_sqlx("specialities_list"))
    }

    /// Current groups only; superseded SCD2 rows are excluded.
    pub async fn groups(&self, specialty_id: Option<i64>) -> Result<Vec<StudentGroup>> {
        let mut query: QueryBuilder<'_, Postgres> = QueryBuilder::new(
            "SELECT id, name, course, education_degree, number_of_students, specialty_id \
             FROM student_groups WHERE valid_to IS NULL",
        );
        if let Some(specialty_id) = specialty_id {
            query.push(" AND specialty_id = ").push_bind(specialty_id);
        }
        query.push(" ORDER BY id");
        query
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(from_sqlx("groups_list"))
    }

    pub async fn employees_by_department(
        &self,
        department_id: Option<i64>,
    ) -> Result<Vec<Employee>> {
        let mut query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new(format!("SELECT {EMPLOYEE_COLUMNS} FROM employees"));
        if let Some(department_id) = department_id {
            query
                .push(
                    " JOIN departments_employees de ON de.employee_id = employees.id \
                     AND de.department_id = ",
                )
                .push_bind(department_id);
        }
        query.push(" ORDER BY id");
        let rows: Vec<EmployeeRow> = query
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(from_sqlx("employees_list"))?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    pub async fn auditories(&self) -> Result<Vec<Auditory>> {
        sqlx::query_as(
            "SELECT id, name, building_number, note, capacity, auditory_type, department_id \
             FROM auditories ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(from_sqlx("auditories_list"))
    }

    pub async fn group_info(&self, group_name: &str) -> Result<Option<GroupInfo>> {
        sqlx::query_as(
            "SELECT g.name, g.course, g.education_degree, g.number_of_students, \
                    s.name AS speciality, s.code AS speciality_code, s.education_form, \
                    f.name AS faculty, f.abbr AS faculty_abbr \
             FROM student_groups g \
             JOIN specialities s ON s.id = g.specialty_id \
             JOIN faculties f ON f.id = s.faculty_id \
             WHERE g.name = $1 AND g.valid_to IS NULL \
             LIMIT 1",
        )
        .bind(group_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(from_sqlx("group_info"))
    }
}
