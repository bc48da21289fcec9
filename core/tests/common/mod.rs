/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use company_core::database::open_db;
use sea_orm::{ConnectOptions, DatabaseConnection};

/// A fresh, migrated in-memory database. One connection keeps every query on
/// the same SQLite memory instance.
pub async fn test_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    open_db(opt).await.expect("in-memory database")
}
