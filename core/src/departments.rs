/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait};
use uuid::Uuid;

use super::database::random_record;
use super::input::{DepartmentInput, DepartmentPatch};
use super::types::*;

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<MDepartment>, DbErr> {
    EDepartment::find().all(db).await
}

pub async fn find_random(db: &DatabaseConnection) -> Result<Option<MDepartment>, DbErr> {
    random_record::<EDepartment>(db).await
}

pub async fn find_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<MDepartment>, DbErr> {
    EDepartment::find_by_id(id).one(db).await
}

pub async fn insert(
    db: &DatabaseConnection,
    input: DepartmentInput,
) -> Result<MDepartment, DbErr> {
    let department = ADepartment {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
    };

    let department = department.insert(db).await?;
    tracing::debug!(id = %department.id, "department created");

    Ok(department)
}

pub async fn update_by_id(
    db: &DatabaseConnection,
    id: Uuid,
    patch: DepartmentPatch,
) -> Result<Option<MDepartment>, DbErr> {
    let Some(department) = find_by_id(db, id).await? else {
        return Ok(None);
    };

    let Some(name) = patch.name else {
        return Ok(Some(department));
    };

    let mut adepartment: ADepartment = department.into();
    adepartment.name = Set(name);

    adepartment.update(db).await.map(Some)
}

/// Employees referencing the department keep their stored reference.
pub async fn delete_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<MDepartment>, DbErr> {
    let Some(department) = find_by_id(db, id).await? else {
        return Ok(None);
    };

    let result = EDepartment::delete_by_id(department.id).exec(db).await?;

    if result.rows_affected == 0 {
        return Ok(None);
    }

    tracing::debug!(id = %department.id, "department deleted");

    Ok(Some(department))
}
