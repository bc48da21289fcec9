/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Employee queries.
//!
//! Besides the by-id operations used by the HTTP layer, employees support
//! filter based reads and writes. A filter matches every field it sets
//! exactly; the default filter matches every employee.

use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use uuid::Uuid;

use super::consts::POPULATE_BATCH_SIZE;
use super::database::random_record;
use super::input::{EmployeeInput, EmployeePatch};
use super::types::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub department: Option<String>,
}

impl EmployeeFilter {
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    fn condition(&self) -> Condition {
        let mut condition = Condition::all();

        if let Some(first_name) = &self.first_name {
            condition = condition.add(CEmployee::FirstName.eq(first_name.clone()));
        }

        if let Some(last_name) = &self.last_name {
            condition = condition.add(CEmployee::LastName.eq(last_name.clone()));
        }

        if let Some(department) = &self.department {
            condition = condition.add(CEmployee::Department.eq(department.clone()));
        }

        condition
    }
}

impl From<&EmployeeInput> for EmployeeFilter {
    fn from(input: &EmployeeInput) -> Self {
        EmployeeFilter {
            first_name: Some(input.first_name.clone()),
            last_name: Some(input.last_name.clone()),
            department: Some(input.department.clone()),
        }
    }
}

/// An employee with its department reference resolved. `department` is
/// `None` when the stored text is not the id of an existing department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedEmployee {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub department: Option<MDepartment>,
}

impl PopulatedEmployee {
    fn new(employee: MEmployee, department: Option<MDepartment>) -> Self {
        PopulatedEmployee {
            id: employee.id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            department,
        }
    }
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<MEmployee>, DbErr> {
    EEmployee::find().all(db).await
}

pub async fn find_random(db: &DatabaseConnection) -> Result<Option<MEmployee>, DbErr> {
    random_record::<EEmployee>(db).await
}

pub async fn find_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<MEmployee>, DbErr> {
    EEmployee::find_by_id(id).one(db).await
}

pub async fn find(
    db: &DatabaseConnection,
    filter: &EmployeeFilter,
) -> Result<Vec<MEmployee>, DbErr> {
    EEmployee::find().filter(filter.condition()).all(db).await
}

pub async fn find_one(
    db: &DatabaseConnection,
    filter: &EmployeeFilter,
) -> Result<Option<MEmployee>, DbErr> {
    EEmployee::find().filter(filter.condition()).one(db).await
}

pub async fn insert(db: &DatabaseConnection, input: EmployeeInput) -> Result<MEmployee, DbErr> {
    let employee = AEmployee {
        id: Set(Uuid::new_v4()),
        first_name: Set(input.first_name),
        last_name: Set(input.last_name),
        department: Set(input.department),
    };

    let employee = employee.insert(db).await?;
    tracing::debug!(id = %employee.id, "employee created");

    Ok(employee)
}

async fn apply_patch(
    db: &DatabaseConnection,
    employee: MEmployee,
    patch: EmployeePatch,
) -> Result<MEmployee, DbErr> {
    if patch.is_empty() {
        return Ok(employee);
    }

    let mut aemployee: AEmployee = employee.into();

    if let Some(first_name) = patch.first_name {
        aemployee.first_name = Set(first_name);
    }

    if let Some(last_name) = patch.last_name {
        aemployee.last_name = Set(last_name);
    }

    if let Some(department) = patch.department {
        aemployee.department = Set(department);
    }

    aemployee.update(db).await
}

pub async fn update_by_id(
    db: &DatabaseConnection,
    id: Uuid,
    patch: EmployeePatch,
) -> Result<Option<MEmployee>, DbErr> {
    match find_by_id(db, id).await? {
        Some(employee) => apply_patch(db, employee, patch).await.map(Some),
        None => Ok(None),
    }
}

/// Updates the first employee matching `filter` and leaves the rest alone.
pub async fn update_one(
    db: &DatabaseConnection,
    filter: &EmployeeFilter,
    patch: EmployeePatch,
) -> Result<Option<MEmployee>, DbErr> {
    match find_one(db, filter).await? {
        Some(employee) => apply_patch(db, employee, patch).await.map(Some),
        None => Ok(None),
    }
}

/// Returns the number of rows changed. An empty patch changes nothing.
pub async fn update_many(
    db: &DatabaseConnection,
    filter: &EmployeeFilter,
    patch: EmployeePatch,
) -> Result<u64, DbErr> {
    if patch.is_empty() {
        return Ok(0);
    }

    let mut update = EEmployee::update_many().filter(filter.condition());

    if let Some(first_name) = patch.first_name {
        update = update.col_expr(CEmployee::FirstName, Expr::value(first_name));
    }

    if let Some(last_name) = patch.last_name {
        update = update.col_expr(CEmployee::LastName, Expr::value(last_name));
    }

    if let Some(department) = patch.department {
        update = update.col_expr(CEmployee::Department, Expr::value(department));
    }

    let result = update.exec(db).await?;
    tracing::debug!(rows = result.rows_affected, "employees updated");

    Ok(result.rows_affected)
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<MEmployee>, DbErr> {
    let Some(employee) = find_by_id(db, id).await? else {
        return Ok(None);
    };

    let result = EEmployee::delete_by_id(employee.id).exec(db).await?;

    // Removed by someone else between the lookup and the delete.
    if result.rows_affected == 0 {
        return Ok(None);
    }

    tracing::debug!(id = %employee.id, "employee deleted");

    Ok(Some(employee))
}

/// Removes the first employee matching `filter` and returns it.
pub async fn delete_one(
    db: &DatabaseConnection,
    filter: &EmployeeFilter,
) -> Result<Option<MEmployee>, DbErr> {
    let Some(employee) = find_one(db, filter).await? else {
        return Ok(None);
    };

    let result = EEmployee::delete_by_id(employee.id).exec(db).await?;

    Ok((result.rows_affected > 0).then_some(employee))
}

pub async fn delete_many(db: &DatabaseConnection, filter: &EmployeeFilter) -> Result<u64, DbErr> {
    let result = EEmployee::delete_many()
        .filter(filter.condition())
        .exec(db)
        .await?;
    tracing::debug!(rows = result.rows_affected, "employees deleted");

    Ok(result.rows_affected)
}

pub async fn populate(
    db: &DatabaseConnection,
    employee: MEmployee,
) -> Result<PopulatedEmployee, DbErr> {
    let department = match employee.department_id() {
        Some(id) => EDepartment::find_by_id(id).one(db).await?,
        None => None,
    };

    Ok(PopulatedEmployee::new(employee, department))
}

/// Same as [`populate`], resolving references in batches of distinct ids.
pub async fn populate_all(
    db: &DatabaseConnection,
    employees: Vec<MEmployee>,
) -> Result<Vec<PopulatedEmployee>, DbErr> {
    let ids: Vec<Uuid> = employees
        .iter()
        .filter_map(MEmployee::department_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut departments: HashMap<Uuid, MDepartment> = HashMap::new();

    // Bound the IN list below every backend's bind parameter limit.
    for chunk in ids.chunks(POPULATE_BATCH_SIZE) {
        departments.extend(
            EDepartment::find()
                .filter(CDepartment::Id.is_in(chunk.iter().copied()))
                .all(db)
                .await?
                .into_iter()
                .map(|d| (d.id, d)),
        );
    }

    Ok(employees
        .into_iter()
        .map(|employee| {
            let department = employee
                .department_id()
                .and_then(|id| departments.get(&id).cloned());
            PopulatedEmployee::new(employee, department)
        })
        .collect())
}
