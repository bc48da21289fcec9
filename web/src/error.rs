/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use company_core::input::ValidationError;
use company_core::types::BaseResponse;
use sea_orm::DbErr;
use serde_json::Value;
use std::fmt;

#[derive(Debug)]
pub enum WebError {
    NotFound(String),
    Validation(ValidationError),
    Database(DbErr),
    JsonParsing(JsonRejection),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            WebError::Validation(err) => write!(f, "Validation error: {}", err),
            WebError::Database(err) => write!(f, "Database error: {}", err),
            WebError::JsonParsing(err) => write!(f, "JSON parsing error: {}", err),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebError::Validation(err) => Some(err),
            WebError::Database(err) => Some(err),
            WebError::JsonParsing(err) => Some(err),
            WebError::NotFound(_) => None,
        }
    }
}

impl From<DbErr> for WebError {
    fn from(err: DbErr) -> Self {
        WebError::Database(err)
    }
}

impl From<ValidationError> for WebError {
    fn from(err: ValidationError) -> Self {
        WebError::Validation(err)
    }
}

impl From<JsonRejection> for WebError {
    fn from(err: JsonRejection) -> Self {
        WebError::JsonParsing(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            WebError::NotFound(msg) => (StatusCode::NOT_FOUND, Value::String(msg)),
            // The message is the field -> error map so clients can point at inputs.
            WebError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                serde_json::to_value(&err).unwrap_or(Value::Null),
            ),
            WebError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Value::String("Database error".to_string()),
                )
            }
            WebError::JsonParsing(err) => (
                StatusCode::BAD_REQUEST,
                Value::String(format!("Invalid JSON: {}", err)),
            ),
        };

        let body = Json(BaseResponse {
            error: true,
            message,
        });

        (status, body).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;

impl WebError {
    pub fn not_found(resource: &str) -> Self {
        WebError::NotFound(format!("{} not found", resource))
    }
}
