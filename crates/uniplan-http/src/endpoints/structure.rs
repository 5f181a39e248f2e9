//! Directory listing endpoints.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use uniplan_core_types::Employee;
use uniplan_store::{Department, Faculty, Speciality, StudentGroup};

use crate::failure::ApiFailure;
use crate::state::AppState;

/// `GET /structure/faculties`
pub async fn faculties(State(state): State<AppState>) -> Result<Json<Vec<Faculty>>, ApiFailure> {
    Ok(Json(state.ctx.structure.faculties().await?))
}

/// `GET /structure/departments`
pub async fn departments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Department>>, ApiFailure> {
    Ok(Json(state.ctx.structure.departments().await?))
}

#[derive(Debug, Deserialize)]
pub struct SpecialitiesParams {
    pub faculty_id: Option<i64>,
}

/// `GET /structure/specialities?faculty_id=`
pub async fn specialities(
    State(state): State<AppState>,
    Query(params): Query<SpecialitiesParams>,
) -> Result<Json<Vec<Speciality>>, ApiFailure> {
    Ok(Json(state.ctx.structure.specialities(params.faculty_id).await?))
}

#[derive(Debug, Deserialize)]
pub struct GroupsParams {
    pub specialty_id: Option<i64>,
}

/// `GET /structure/groups?specialty_id=`
pub async fn groups(
    State(state): State<AppState>,
    Query(params): Query<GroupsParams>,
) -> Result<Json<Vec<StudentGroup>>, ApiFailure> {
    Ok(Json(state.ctx.structure.groups(params.specialty_id).await?))
}

#[derive(Debug, Deserialize)]
pub struct EmployeesParams {
    pub department_id: Option<i64>,
}

/// `GET /structure/employees?department_id=`
pub async fn employees(
    State(state): State<AppState>,
    Query(params): Query<EmployeesParams>,
) -> Result<Json<Vec<Employee>>, ApiFailure> {
    Ok(Json(
        state
            .ctx
            .structure
            .employees_by_department(params.department_id)
            .await?,
    ))
}
