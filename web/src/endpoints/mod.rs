/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod departments;
pub mod employees;
pub mod products;

use crate::error::{WebError, WebResult};
use axum::extract::Json;
use axum::extract::rejection::JsonRejection;
use company_core::types::BaseResponse;
use serde_json::Value;
use uuid::Uuid;

pub async fn handle_404() -> WebError {
    WebError::NotFound("Not Found".to_string())
}

pub async fn get_health() -> WebResult<Json<BaseResponse<String>>> {
    let res = BaseResponse {
        error: false,
        message: "200 ALIVE".to_string(),
    };

    Ok(Json(res))
}

/// Ids that are not UUIDs cannot name a record, so they are reported as
/// missing rather than malformed.
pub(crate) fn parse_id(id: &str, resource: &str) -> WebResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| WebError::not_found(resource))
}

pub(crate) fn payload(body: Result<Json<Value>, JsonRejection>) -> WebResult<Value> {
    let Json(value) = body?;
    Ok(value)
}

pub(crate) fn respond<T>(message: T) -> WebResult<Json<BaseResponse<T>>> {
    Ok(Json(BaseResponse {
        error: false,
        message,
    }))
}
