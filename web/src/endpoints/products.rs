/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::{parse_id, payload, respond};
use crate::error::{WebError, WebResult};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use company_core::products;
use company_core::input::{ProductInput, ProductPatch};
use company_core::types::*;
use serde_json::Value;
use std::sync::Arc;

pub async fn get_all(
    state: State<Arc<ServerState>>,
) -> WebResult<Json<BaseResponse<Vec<MProduct>>>> {
    respond(products::find_all(&state.db).await?)
}

pub async fn get_random(
    state: State<Arc<ServerState>>,
) -> WebResult<Json<BaseResponse<MProduct>>> {
    let product = products::find_random(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Product"))?;

    respond(product)
}

pub async fn get_by_id(
    state: State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> WebResult<Json<BaseResponse<MProduct>>> {
    let id = parse_id(&id, "Product")?;
    let product = products::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| WebError::not_found("Product"))?;

    respond(product)
}

pub async fn add_new(
    state: State<Arc<ServerState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MProduct>>> {
    let input = ProductInput::from_json(&payload(body)?)?;
    respond(products::insert(&state.db, input).await?)
}

pub async fn edit_by_id(
    state: State<Arc<ServerState>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MProduct>>> {
    let id = parse_id(&id, "Product")?;
    let patch = ProductPatch::from_json(&payload(body)?)?;
    let product = products::update_by_id(&state.db, id, patch)
        .await?
        .ok_or_else(|| WebError::not_found("Product"))?;

    respond(product)
}

pub async fn delete_by_id(
    state: State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> WebResult<Json<BaseResponse<String>>> {
    let id = parse_id(&id, "Product")?;
    products::delete_by_id(&state.db, id)
        .await?
        .ok_or_else(|| WebError::not_found("Product"))?;

    respond("Product deleted".to_string())
}
