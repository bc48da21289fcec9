/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait};
use uuid::Uuid;

use super::database::random_record;
use super::input::{ProductInput, ProductPatch};
use super::types::*;

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<MProduct>, DbErr> {
    EProduct::find().all(db).await
}

pub async fn find_random(db: &DatabaseConnection) -> Result<Option<MProduct>, DbErr> {
    random_record::<EProduct>(db).await
}

pub async fn find_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<MProduct>, DbErr> {
    EProduct::find_by_id(id).one(db).await
}

pub async fn insert(db: &DatabaseConnection, input: ProductInput) -> Result<MProduct, DbErr> {
    let product = AProduct {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        client: Set(input.client),
    };

    let product = product.insert(db).await?;
    tracing::debug!(id = %product.id, "product created");

    Ok(product)
}

pub async fn update_by_id(
    db: &DatabaseConnection,
    id: Uuid,
    patch: ProductPatch,
) -> Result<Option<MProduct>, DbErr> {
    let Some(product) = find_by_id(db, id).await? else {
        return Ok(None);
    };

    if patch.is_empty() {
        return Ok(Some(product));
    }

    let mut aproduct: AProduct = product.into();

    if let Some(name) = patch.name {
        aproduct.name = Set(name);
    }

    if let Some(client) = patch.client {
        aproduct.client = Set(client);
    }

    aproduct.update(db).await.map(Some)
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<MProduct>, DbErr> {
    let Some(product) = find_by_id(db, id).await? else {
        return Ok(None);
    };

    let result = EProduct::delete_by_id(product.id).exec(db).await?;

    if result.rows_affected == 0 {
        return Ok(None);
    }

    tracing::debug!(id = %product.id, "product deleted");

    Ok(Some(product))
}
