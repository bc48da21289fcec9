/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for employee queries against a migrated in-memory database

mod common;

use common::test_db;
use company_core::employees::{self, EmployeeFilter};
use company_core::input::{DepartmentInput, EmployeeInput, EmployeePatch};
use company_core::departments;
use company_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    DatabaseBackend, DatabaseConnection, DbErr, EntityTrait, MockDatabase, MockExecResult,
};
use uuid::Uuid;

fn input(first_name: &str, last_name: &str, department: &str) -> EmployeeInput {
    EmployeeInput {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        department: department.to_string(),
    }
}

fn john() -> EmployeeInput {
    input("John", "Doe", "IT")
}

fn amanda() -> EmployeeInput {
    input("Amanda", "Doe", "Marketing")
}

fn renamed() -> EmployeePatch {
    input("=John=", "=Doe=", "=IT=").into()
}

async fn seed(db: &DatabaseConnection) -> Result<(), DbErr> {
    employees::insert(db, john()).await?;
    employees::insert(db, amanda()).await?;
    Ok(())
}

#[tokio::test]
async fn test_find_returns_all() -> Result<(), DbErr> {
    let db = test_db().await;
    seed(&db).await?;

    let all = employees::find(&db, &EmployeeFilter::default()).await?;
    assert_eq!(all.len(), 2);
    assert_eq!(employees::find_all(&db).await?.len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_find_one_by_fields() -> Result<(), DbErr> {
    let db = test_db().await;
    seed(&db).await?;

    let employee = employees::find_one(&db, &EmployeeFilter::from(&john()))
        .await?
        .unwrap();

    assert_eq!(employee.first_name, "John");
    assert_eq!(employee.last_name, "Doe");
    assert_eq!(employee.department, "IT");

    let by_last_name = employees::find(&db, &EmployeeFilter::default().last_name("Doe")).await?;
    assert_eq!(by_last_name.len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_insert_persists() -> Result<(), DbErr> {
    let db = test_db().await;

    let employee = employees::insert(&db, john()).await?;
    let found = employees::find_by_id(&db, employee.id).await?;

    assert_eq!(found, Some(employee));

    Ok(())
}

#[tokio::test]
async fn test_update_one() -> Result<(), DbErr> {
    let db = test_db().await;
    seed(&db).await?;

    let updated = employees::update_one(&db, &EmployeeFilter::from(&john()), renamed()).await?;
    assert!(updated.is_some());

    let found = employees::find_one(&db, &EmployeeFilter::from(&input("=John=", "=Doe=", "=IT=")))
        .await?;
    assert!(found.is_some());

    let untouched = employees::find_one(&db, &EmployeeFilter::from(&amanda())).await?;
    assert!(untouched.is_some());

    Ok(())
}

#[tokio::test]
async fn test_update_by_id() -> Result<(), DbErr> {
    let db = test_db().await;
    seed(&db).await?;

    let employee = employees::find_one(&db, &EmployeeFilter::from(&john()))
        .await?
        .unwrap();

    let updated = employees::update_by_id(&db, employee.id, renamed())
        .await?
        .unwrap();
    assert_eq!(updated.id, employee.id);
    assert_eq!(updated.first_name, "=John=");

    let found = employees::find_one(&db, &EmployeeFilter::from(&input("=John=", "=Doe=", "=IT=")))
        .await?;
    assert_eq!(found, Some(updated));

    Ok(())
}

#[tokio::test]
async fn test_update_by_id_partial_and_missing() -> Result<(), DbErr> {
    let db = test_db().await;
    let employee = employees::insert(&db, john()).await?;

    let patch = EmployeePatch {
        department: Some("Sales".to_string()),
        ..Default::default()
    };
    let updated = employees::update_by_id(&db, employee.id, patch)
        .await?
        .unwrap();
    assert_eq!(updated.first_name, "John");
    assert_eq!(updated.department, "Sales");

    let unchanged = employees::update_by_id(&db, employee.id, EmployeePatch::default())
        .await?
        .unwrap();
    assert_eq!(unchanged, updated);

    let missing = employees::update_by_id(&db, Uuid::new_v4(), renamed()).await?;
    assert!(missing.is_none());

    Ok(())
}

#[tokio::test]
async fn test_update_many() -> Result<(), DbErr> {
    let db = test_db().await;
    seed(&db).await?;

    let changed = employees::update_many(
        &db,
        &EmployeeFilter::default(),
        input("Updated!", "Updated!", "Updated!").into(),
    )
    .await?;
    assert_eq!(changed, 2);

    let updated = employees::find(
        &db,
        &EmployeeFilter::from(&input("Updated!", "Updated!", "Updated!")),
    )
    .await?;
    assert_eq!(updated.len(), 2);

    let nothing = employees::update_many(&db, &EmployeeFilter::default(), EmployeePatch::default())
        .await?;
    assert_eq!(nothing, 0);

    Ok(())
}

#[tokio::test]
async fn test_delete_one() -> Result<(), DbErr> {
    let db = test_db().await;
    seed(&db).await?;

    let removed = employees::delete_one(&db, &EmployeeFilter::from(&john())).await?;
    assert!(removed.is_some());

    let gone = employees::find_one(&db, &EmployeeFilter::from(&john())).await?;
    assert!(gone.is_none());
    assert_eq!(employees::find_all(&db).await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_delete_many() -> Result<(), DbErr> {
    let db = test_db().await;
    seed(&db).await?;

    let removed = employees::delete_many(&db, &EmployeeFilter::default()).await?;
    assert_eq!(removed, 2);

    let all = employees::find(&db, &EmployeeFilter::default()).await?;
    assert_eq!(all.len(), 0);

    Ok(())
}

#[tokio::test]
async fn test_delete_by_id() -> Result<(), DbErr> {
    let db = test_db().await;
    let employee = employees::insert(&db, john()).await?;

    assert_eq!(
        employees::delete_by_id(&db, employee.id).await?,
        Some(employee.clone())
    );
    assert!(employees::delete_by_id(&db, employee.id).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_find_random() -> Result<(), DbErr> {
    let db = test_db().await;
    assert!(employees::find_random(&db).await?.is_none());

    seed(&db).await?;
    let all = employees::find_all(&db).await?;

    for _ in 0..10 {
        let employee = employees::find_random(&db).await?.unwrap();
        assert!(all.contains(&employee));
    }

    Ok(())
}

#[tokio::test]
async fn test_populate_department() -> Result<(), DbErr> {
    let db = test_db().await;

    let department = departments::insert(
        &db,
        DepartmentInput {
            name: "Department #1".to_string(),
        },
    )
    .await?;
    employees::insert(&db, input("John", "Doe", &department.id.to_string())).await?;

    let employee = employees::find_one(
        &db,
        &EmployeeFilter::default().first_name("John").last_name("Doe"),
    )
    .await?
    .unwrap();
    let populated = employees::populate(&db, employee).await?;

    assert_eq!(populated.department.map(|d| d.name), Some("Department #1".to_string()));

    Ok(())
}

#[tokio::test]
async fn test_populate_unresolved_department() -> Result<(), DbErr> {
    let db = test_db().await;

    let department = departments::insert(
        &db,
        DepartmentInput {
            name: "Department #1".to_string(),
        },
    )
    .await?;
    let linked = employees::insert(&db, input("John", "Doe", &department.id.to_string())).await?;
    let free_text = employees::insert(&db, amanda()).await?;

    departments::delete_by_id(&db, department.id).await?;

    // Deleting the department leaves the reference in place but unresolved.
    let employee = employees::find_by_id(&db, linked.id).await?.unwrap();
    assert_eq!(employee.department, department.id.to_string());

    let populated = employees::populate_all(&db, vec![employee, free_text]).await?;
    assert_eq!(populated.len(), 2);
    assert!(populated.iter().all(|e| e.department.is_none()));
    assert_eq!(populated[1].first_name, "Amanda");

    Ok(())
}

#[tokio::test]
async fn test_populate_all_resolves_each() -> Result<(), DbErr> {
    let db = test_db().await;

    let first = departments::insert(&db, DepartmentInput { name: "First".to_string() }).await?;
    let second = departments::insert(&db, DepartmentInput { name: "Second".to_string() }).await?;

    employees::insert(&db, input("A", "One", &first.id.to_string())).await?;
    employees::insert(&db, input("B", "Two", &second.id.to_string())).await?;
    employees::insert(&db, input("C", "Three", &first.id.to_string())).await?;

    let populated = employees::populate_all(&db, employees::find_all(&db).await?).await?;

    for employee in populated {
        let expected = if employee.last_name == "Two" { "Second" } else { "First" };
        assert_eq!(employee.department.unwrap().name, expected);
    }

    Ok(())
}

#[tokio::test]
async fn test_populate_all_many_employees_one_department() -> Result<(), DbErr> {
    let db = test_db().await;

    let department = departments::insert(
        &db,
        DepartmentInput {
            name: "Department #1".to_string(),
        },
    )
    .await?;

    // More employees than SQLite accepts bind parameters in one statement.
    let total = 33_000;
    for batch in (0..total).collect::<Vec<_>>().chunks(1000) {
        let rows = batch.iter().map(|n| AEmployee {
            id: Set(Uuid::new_v4()),
            first_name: Set(format!("Employee {n}")),
            last_name: Set("Doe".to_string()),
            department: Set(department.id.to_string()),
        });
        EEmployee::insert_many(rows).exec_without_returning(&db).await?;
    }

    let all = employees::find_all(&db).await?;
    assert_eq!(all.len(), total);

    let populated = employees::populate_all(&db, all).await?;
    assert_eq!(populated.len(), total);
    assert!(
        populated
            .iter()
            .all(|e| e.department.as_ref() == Some(&department))
    );

    Ok(())
}

#[tokio::test]
async fn test_populate_all_many_departments() -> Result<(), DbErr> {
    let db = test_db().await;

    let names: Vec<String> = (0..2_500).map(|n| format!("Department {n}")).collect();
    let rows: Vec<ADepartment> = names
        .iter()
        .map(|name| ADepartment {
            id: Set(Uuid::new_v4()),
            name: Set(name.clone()),
        })
        .collect();
    for batch in rows.chunks(1000) {
        EDepartment::insert_many(batch.to_vec())
            .exec_without_returning(&db)
            .await?;
    }

    for department in departments::find_all(&db).await? {
        employees::insert(&db, input("John", &department.name, &department.id.to_string()))
            .await?;
    }

    let populated = employees::populate_all(&db, employees::find_all(&db).await?).await?;
    assert_eq!(populated.len(), names.len());

    for employee in populated {
        assert_eq!(employee.department.unwrap().name, employee.last_name);
    }

    Ok(())
}

#[tokio::test]
async fn test_delete_already_removed() -> Result<(), DbErr> {
    let employee = MEmployee {
        id: Uuid::new_v4(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        department: "IT".to_string(),
    };

    // The lookup still sees the row, the delete finds nothing left.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![employee.clone()], vec![employee.clone()]])
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    assert!(employees::delete_by_id(&db, employee.id).await?.is_none());
    assert!(
        employees::delete_one(&db, &EmployeeFilter::default())
            .await?
            .is_none()
    );

    Ok(())
}
