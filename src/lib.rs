// src/lib.rs

use axum::{
    routing::{get, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
pub mod common;
pub mod config;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod registry;
pub mod services;

pub use config::AppState;

use docs::ApiDoc;

/// Monta o router completo da aplicação sobre o estado compartilhado.
///
/// Fica fora do `main` para os testes de integração dirigirem o mesmo
/// router em processo, sem abrir porta nenhuma.
pub fn create_router(app_state: AppState) -> Router {
    let navigation_routes = Router::new()
        .route("/menu", get(handlers::navigation::get_menu))
        .route("/authorize", get(handlers::navigation::get_authorization))
        .route("/view", get(handlers::navigation::get_view));

    let caixa_routes = Router::new()
        .route("/status", get(handlers::caixa::get_status))
        .route("/sessao", put(handlers::caixa::put_session));

    // Combina tudo no router principal
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/navigation", navigation_routes)
        .nest("/api/caixa", caixa_routes)
        .with_state(app_state)
}
