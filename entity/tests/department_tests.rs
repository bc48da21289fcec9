/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for department and product entities

use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};
use uuid::Uuid;

#[tokio::test]
async fn test_department_entity_basic() -> Result<(), DbErr> {
    let department_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![department::Model {
            id: department_id,
            name: "Department #1".to_owned(),
        }]])
        .into_connection();

    let result = department::Entity::find_by_id(department_id).one(&db).await?;

    assert_eq!(result.map(|d| d.name), Some("Department #1".to_owned()));

    Ok(())
}

#[tokio::test]
async fn test_department_missing() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<department::Model>::new()])
        .into_connection();

    let result = department::Entity::find_by_id(Uuid::new_v4()).one(&db).await?;

    assert!(result.is_none());

    Ok(())
}

#[tokio::test]
async fn test_product_entity_basic() -> Result<(), DbErr> {
    let product_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![product::Model {
            id: product_id,
            name: "Widget".to_owned(),
            client: "ACME".to_owned(),
        }]])
        .into_connection();

    let product = product::Entity::find_by_id(product_id)
        .one(&db)
        .await?
        .unwrap();

    assert_eq!(product.name, "Widget");
    assert_eq!(product.client, "ACME");

    Ok(())
}
