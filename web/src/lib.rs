/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod endpoints;
pub mod error;


use axum::Router;
use axum::http::Method;
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::routing::get;
use company_core::types::ServerState;
use endpoints::{departments, employees, products};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([ACCEPT, CONTENT_TYPE]);

    Router::new()
        .route(
            "/employees",
            get(employees::get_all).post(employees::add_new),
        )
        .route("/employees/random", get(employees::get_random))
        .route(
            "/employees/{id}",
            get(employees::get_by_id)
                .put(employees::edit_by_id)
                .delete(employees::delete_by_id),
        )
        .route(
            "/departments",
            get(departments::get_all).post(departments::add_new),
        )
        .route("/departments/random", get(departments::get_random))
        .route(
            "/departments/{id}",
            get(departments::get_by_id)
                .put(departments::edit_by_id)
                .delete(departments::delete_by_id),
        )
        .route(
            "/products",
            get(products::get_all).post(products::add_new),
        )
        .route("/products/random", get(products::get_random))
        .route(
            "/products/{id}",
            get(products::get_by_id)
                .put(products::edit_by_id)
                .delete(products::delete_by_id),
        )
        .route("/health", get(endpoints::get_health))
        .fallback(endpoints::handle_404)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = create_router(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    tracing::info!("Listening on {}", server_url);

    axum::serve(listener, app).await
}
