/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

pub const FIELD_FIRST_NAME: &str = "firstName";
pub const FIELD_LAST_NAME: &str = "lastName";
pub const FIELD_DEPARTMENT: &str = "department";
pub const FIELD_NAME: &str = "name";
pub const FIELD_CLIENT: &str = "client";

/// Department ids bound per lookup when populating many employees.
pub const POPULATE_BATCH_SIZE: usize = 1000;
