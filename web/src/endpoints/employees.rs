/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::{parse_id, payload, respond};
use crate::error::{WebError, WebResult};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use company_core::employees::{self, PopulatedEmployee};
use company_core::input::{EmployeeInput, EmployeePatch};
use company_core::types::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct PopulateQuery {
    pub populate: Option<String>,
}

impl PopulateQuery {
    fn department(&self) -> bool {
        self.populate.as_deref() == Some("department")
    }
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum EmployeeResponse {
    Plain(MEmployee),
    Populated(PopulatedEmployee),
}

pub async fn get_all(
    state: State<Arc<ServerState>>,
    Query(query): Query<PopulateQuery>,
) -> WebResult<Json<BaseResponse<Vec<EmployeeResponse>>>> {
    let employees = employees::find_all(&state.db).await?;

    let employees = if query.department() {
        employees::populate_all(&state.db, employees)
            .await?
            .into_iter()
            .map(EmployeeResponse::Populated)
            .collect()
    } else {
        employees.into_iter().map(EmployeeResponse::Plain).collect()
    };

    respond(employees)
}

pub async fn get_random(
    state: State<Arc<ServerState>>,
    Query(query): Query<PopulateQuery>,
) -> WebResult<Json<BaseResponse<EmployeeResponse>>> {
    let employee = employees::find_random(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Employee"))?;

    respond(with_department(&state, employee, &query).await?)
}

pub async fn get_by_id(
    state: State<Arc<ServerState>>,
    Path(id): Path<String>,
    Query(query): Query<PopulateQuery>,
) -> WebResult<Json<BaseResponse<EmployeeResponse>>> {
    let id = parse_id(&id, "Employee")?;
    let employee = employees::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| WebError::not_found("Employee"))?;

    respond(with_department(&state, employee, &query).await?)
}

pub async fn add_new(
    state: State<Arc<ServerState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MEmployee>>> {
    let input = EmployeeInput::from_json(&payload(body)?)?;
    let employee = employees::insert(&state.db, input).await?;

    respond(employee)
}

pub async fn edit_by_id(
    state: State<Arc<ServerState>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MEmployee>>> {
    let id = parse_id(&id, "Employee")?;
    let patch = EmployeePatch::from_json(&payload(body)?)?;
    let employee = employees::update_by_id(&state.db, id, patch)
        .await?
        .ok_or_else(|| WebError::not_found("Employee"))?;

    respond(employee)
}

pub async fn delete_by_id(
    state: State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> WebResult<Json<BaseResponse<String>>> {
    let id = parse_id(&id, "Employee")?;
    employees::delete_by_id(&state.db, id)
        .await?
        .ok_or_else(|| WebError::not_found("Employee"))?;

    respond("Employee deleted".to_string())
}

async fn with_department(
    state: &ServerState,
    employee: MEmployee,
    query: &PopulateQuery,
) -> WebResult<EmployeeResponse> {
    if query.department() {
        Ok(EmployeeResponse::Populated(
            employees::populate(&state.db, employee).await?,
        ))
    } else {
        Ok(EmployeeResponse::Plain(employee))
    }
}
