/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{greater_than_zero, port_in_range};
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug, Clone)]
#[command(name = "Company", display_name = "Company", bin_name = "company-server", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "COMPANY_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "COMPANY_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "COMPANY_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(long, env = "COMPANY_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "COMPANY_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "COMPANY_DATABASE_MAX_CONNECTIONS", value_parser = greater_than_zero::<u32>, default_value = "10")]
    pub database_max_connections: u32,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

pub type EDepartment = department::Entity;
pub type EEmployee = employee::Entity;
pub type EProduct = product::Entity;

pub type MDepartment = department::Model;
pub type MEmployee = employee::Model;
pub type MProduct = product::Model;

pub type ADepartment = department::ActiveModel;
pub type AEmployee = employee::ActiveModel;
pub type AProduct = product::ActiveModel;

pub type CDepartment = department::Column;
pub type CEmployee = employee::Column;
pub type CProduct = product::Column;
