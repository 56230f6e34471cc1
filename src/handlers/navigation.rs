// src/handlers/navigation.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// Importa os nossos extratores e erros
use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::{i18n::Locale, session::SessionUser},
    // Importamos os models para referenciar no Swagger
    models::navigation::MenuEntry,
    models::view::ViewContent,
};

// ---
// Parâmetro comum da guarda de rota e da entrega de view
// ---
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PathQuery {
    /// Path declarado na tabela de rotas (ex.: "/checkout").
    #[param(example = "/checkout")]
    pub path: String,
}

// ---
// Resposta da guarda de rota
// ---
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthorizationDecision {
    #[schema(example = true)]
    pub authorized: bool,
}

// GET /api/navigation/menu
#[utoipa::path(
    get,
    path = "/api/navigation/menu",
    tag = "Navegação",
    responses(
        (status = 200, description = "Entradas de menu visíveis ao papel corrente, na ordem da tabela", body = Vec<MenuEntry>),
        (status = 400, description = "Cabeçalho x-user-role malformado")
    ),
    params(
        ("x-user-role" = Option<String>, Header, description = "Papel corrente; ausente = navegação anônima")
    )
)]
pub async fn get_menu(
    State(app_state): State<AppState>,
    session: SessionUser,
) -> impl IntoResponse {
    let entries = app_state.navigation_service.menu(&session.0);

    (StatusCode::OK, Json(entries))
}

// GET /api/navigation/authorize
// A negação aqui é dado para o guardião de rotas, não um erro HTTP.
#[utoipa::path(
    get,
    path = "/api/navigation/authorize",
    tag = "Navegação",
    responses(
        (status = 200, description = "Decisão de autorização para o path pedido", body = AuthorizationDecision),
        (status = 400, description = "Cabeçalho x-user-role malformado")
    ),
    params(
        PathQuery,
        ("x-user-role" = Option<String>, Header, description = "Papel corrente; ausente = navegação anônima")
    )
)]
pub async fn get_authorization(
    State(app_state): State<AppState>,
    session: SessionUser,
    Query(query): Query<PathQuery>,
) -> impl IntoResponse {
    // Path inexistente e papel insuficiente dão o mesmo "false": o
    // guardião não recebe pista de quais paths existem.
    let authorized = app_state
        .navigation_service
        .is_authorized(&session.0, &query.path);

    (StatusCode::OK, Json(AuthorizationDecision { authorized }))
}

// GET /api/navigation/view
#[utoipa::path(
    get,
    path = "/api/navigation/view",
    tag = "Navegação",
    responses(
        (status = 200, description = "Conteúdo da view, carregado na primeira navegação", body = ViewContent),
        (status = 400, description = "Cabeçalho x-user-role malformado"),
        (status = 403, description = "Acesso negado (papel insuficiente ou path desconhecido)"),
        (status = 500, description = "Falha ao carregar a view")
    ),
    params(
        PathQuery,
        ("x-user-role" = Option<String>, Header, description = "Papel corrente; ausente = navegação anônima")
    )
)]
pub async fn get_view(
    State(app_state): State<AppState>,
    locale: Locale,
    session: SessionUser,
    Query(query): Query<PathQuery>,
) -> Result<impl IntoResponse, ApiError> {
    // 1. Checagem de acesso e carga, nessa ordem, dentro do serviço.
    let content = app_state
        .navigation_service
        .resolve_view(&session.0, &query.path)
        .await
        .map_err(|app_err| app_err.to_api_error(locale.0, &app_state.i18n_store))?;

    // 2. O slot guarda um Arc; a resposta sai com uma cópia própria.
    Ok((StatusCode::OK, Json(content.as_ref().clone())))
}
