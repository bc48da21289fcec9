/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Request payload validation.
//!
//! Payloads arrive as untyped JSON. Every constructor here checks each
//! required field independently and reports all failures at once, keyed by
//! the JSON field name. Nothing in this module touches the database.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use super::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    /// Absent, `null` or the empty string.
    Required,
    /// Present but not a JSON string.
    NotText,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required => write!(f, "is required"),
            FieldError::NotText => write!(f, "must be text"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("invalid fields: {}", summarize(.errors))]
pub struct ValidationError {
    errors: BTreeMap<String, FieldError>,
}

fn summarize(errors: &BTreeMap<String, FieldError>) -> String {
    errors
        .iter()
        .map(|(field, error)| format!("{} {}", field, error))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<FieldError> {
        self.errors.get(field).copied()
    }

    pub fn has(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, FieldError)> {
        self.errors.iter().map(|(field, error)| (field.as_str(), *error))
    }

    fn add(&mut self, field: &str, error: FieldError) {
        self.errors.insert(field.to_string(), error);
    }
}

fn required_text(payload: &Value, field: &str, errors: &mut ValidationError) -> Option<String> {
    match payload.get(field) {
        None | Some(Value::Null) => {
            errors.add(field, FieldError::Required);
            None
        }
        Some(Value::String(text)) if text.is_empty() => {
            errors.add(field, FieldError::Required);
            None
        }
        Some(Value::String(text)) => Some(text.clone()),
        Some(_) => {
            errors.add(field, FieldError::NotText);
            None
        }
    }
}

/// Absent and `null` mean "leave unchanged".
fn optional_text(payload: &Value, field: &str, errors: &mut ValidationError) -> Option<String> {
    match payload.get(field) {
        None | Some(Value::Null) => None,
        Some(_) => required_text(payload, field, errors),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeInput {
    pub first_name: String,
    pub last_name: String,
    pub department: String,
}

impl EmployeeInput {
    pub fn from_json(payload: &Value) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::default();

        let first_name = required_text(payload, FIELD_FIRST_NAME, &mut errors);
        let last_name = required_text(payload, FIELD_LAST_NAME, &mut errors);
        let department = required_text(payload, FIELD_DEPARTMENT, &mut errors);

        match (first_name, last_name, department) {
            (Some(first_name), Some(last_name), Some(department)) => Ok(EmployeeInput {
                first_name,
                last_name,
                department,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub department: Option<String>,
}

impl EmployeePatch {
    pub fn from_json(payload: &Value) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::default();

        let patch = EmployeePatch {
            first_name: optional_text(payload, FIELD_FIRST_NAME, &mut errors),
            last_name: optional_text(payload, FIELD_LAST_NAME, &mut errors),
            department: optional_text(payload, FIELD_DEPARTMENT, &mut errors),
        };

        if errors.is_empty() {
            Ok(patch)
        } else {
            Err(errors)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.department.is_none()
    }
}

impl From<EmployeeInput> for EmployeePatch {
    fn from(input: EmployeeInput) -> Self {
        EmployeePatch {
            first_name: Some(input.first_name),
            last_name: Some(input.last_name),
            department: Some(input.department),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentInput {
    pub name: String,
}

impl DepartmentInput {
    pub fn from_json(payload: &Value) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::default();

        match required_text(payload, FIELD_NAME, &mut errors) {
            Some(name) => Ok(DepartmentInput { name }),
            None => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentPatch {
    pub name: Option<String>,
}

impl DepartmentPatch {
    pub fn from_json(payload: &Value) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::default();
        let name = optional_text(payload, FIELD_NAME, &mut errors);

        if errors.is_empty() {
            Ok(DepartmentPatch { name })
        } else {
            Err(errors)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductInput {
    pub name: String,
    pub client: String,
}

impl ProductInput {
    pub fn from_json(payload: &Value) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::default();

        let name = required_text(payload, FIELD_NAME, &mut errors);
        let client = required_text(payload, FIELD_CLIENT, &mut errors);

        match (name, client) {
            (Some(name), Some(client)) => Ok(ProductInput { name, client }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub client: Option<String>,
}

impl ProductPatch {
    pub fn from_json(payload: &Value) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::default();

        let patch = ProductPatch {
            name: optional_text(payload, FIELD_NAME, &mut errors),
            client: optional_text(payload, FIELD_CLIENT, &mut errors),
        };

        if errors.is_empty() {
            Ok(patch)
        } else {
            Err(errors)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.client.is_none()
    }
}

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn greater_than_zero<
    T: std::str::FromStr + std::cmp::PartialOrd + std::fmt::Display + Default,
>(
    s: &str,
) -> Result<T, String> {
    let num: T = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;

    if num > T::default() {
        Ok(num)
    } else {
        Err(format!("`{}` is not larger than 0", s))
    }
}
