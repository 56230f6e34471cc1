// src/handlers/caixa.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

// Importa os nossos extratores e erros
use crate::{
    common::{
        error::{ApiError, AppError},
        i18n::Lang,
    },
    config::AppState,
    middleware::{i18n::Locale, session::SessionUser},
    models::caixa::{CaixaSession, CaixaStatus},
    models::navigation::CurrentUser,
};

// A rota da tabela cuja política de papéis guarda os endpoints de caixa.
const CHECKOUT_PATH: &str = "/checkout";

// ---
// Validação Customizada
// ---
fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

// ---
// Payload: retrato de sessão enviado pelo backend de negócio
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngestSessionPayload {
    #[validate(required(message = "O campo 'sessionId' é obrigatório."))]
    pub session_id: Option<Uuid>,

    #[validate(required(message = "O campo 'openedAt' é obrigatório."))]
    pub opened_at: Option<DateTime<Utc>>,

    /// Ausente enquanto a sessão estiver aberta.
    pub closed_at: Option<DateTime<Utc>>,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default)] // Se o JSON não tiver esse campo, assume 0
    pub entradas: Decimal,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default)]
    pub saidas: Decimal,
}

// Validação de consistência entre campos, além da validação campo a campo.
impl IngestSessionPayload {
    fn validate_consistency(&self) -> Result<(), ValidationError> {
        // Regra: a sessão não pode fechar antes de abrir.
        if let (Some(opened_at), Some(closed_at)) = (self.opened_at, self.closed_at) {
            if closed_at < opened_at {
                let mut err = ValidationError::new("ClosedBeforeOpened");
                err.message = Some("A sessão não pode fechar antes de abrir.".into());
                return Err(err);
            }
        }
        Ok(())
    }
}

// O resolver de navegação fazendo o papel de guardião em processo: os
// endpoints de caixa seguem exatamente a política da rota /checkout.
fn require_checkout_access(
    app_state: &AppState,
    user: &CurrentUser,
    lang: Lang,
) -> Result<(), ApiError> {
    if !app_state.navigation_service.is_authorized(user, CHECKOUT_PATH) {
        return Err(AppError::AccessDenied(CHECKOUT_PATH.to_string())
            .to_api_error(lang, &app_state.i18n_store));
    }
    Ok(())
}

// GET /api/caixa/status
#[utoipa::path(
    get,
    path = "/api/caixa/status",
    tag = "Caixa",
    responses(
        (status = 200, description = "Resumo da sessão de caixa corrente", body = CaixaStatus),
        (status = 400, description = "Cabeçalho x-user-role malformado"),
        (status = 403, description = "Papel sem acesso ao caixa"),
        (status = 404, description = "Nenhuma sessão ingerida ainda")
    ),
    params(
        ("x-user-role" = String, Header, description = "Papel do usuário (atendente ou admin)")
    ),
    security(
        ("session_role" = [])
    )
)]
pub async fn get_status(
    State(app_state): State<AppState>,
    locale: Locale,
    session: SessionUser,
) -> Result<impl IntoResponse, ApiError> {
    // 1. Guarda de acesso pela política de /checkout
    require_checkout_access(&app_state, &session.0, locale.0)?;

    // 2. Resumo da sessão corrente (404 enquanto nada foi ingerido)
    let status = app_state
        .caixa_service
        .status()
        .await
        .map_err(|app_err| app_err.to_api_error(locale.0, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(status)))
}

// PUT /api/caixa/sessao
#[utoipa::path(
    put,
    path = "/api/caixa/sessao",
    tag = "Caixa",
    request_body = IngestSessionPayload,
    responses(
        (status = 200, description = "Retrato aceito; devolve o resumo calculado", body = CaixaStatus),
        (status = 400, description = "Payload inválido ou cabeçalho malformado"),
        (status = 403, description = "Papel sem acesso ao caixa")
    ),
    params(
        ("x-user-role" = String, Header, description = "Papel do usuário (atendente ou admin)")
    ),
    security(
        ("session_role" = [])
    )
)]
pub async fn put_session(
    State(app_state): State<AppState>,
    locale: Locale,
    session: SessionUser,
    Json(payload): Json<IngestSessionPayload>,
) -> Result<impl IntoResponse, ApiError> {
    // 1. Guarda de acesso pela política de /checkout
    require_checkout_access(&app_state, &session.0, locale.0)?;

    // 2. Validação padrão do Validator
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(locale.0, &app_state.i18n_store))?;

    // 3. Nossa validação de consistência manual
    payload.validate_consistency().map_err(|e| {
        // Criamos um ValidationErrors manual para manter o padrão de resposta
        let mut errors = validator::ValidationErrors::new();
        errors.add("closedAt", e); // Atribui o erro ao campo closedAt
        AppError::ValidationError(errors).to_api_error(locale.0, &app_state.i18n_store)
    })?;

    // 4. Os `unwrap` são seguros: o `required` acima já barrou os ausentes
    let snapshot = CaixaSession {
        id: payload.session_id.unwrap(),
        opened_at: payload.opened_at.unwrap(),
        closed_at: payload.closed_at,
        entradas: payload.entradas,
        saidas: payload.saidas,
    };

    let status = app_state.caixa_service.ingest(snapshot).await;

    Ok((StatusCode::OK, Json(status)))
}
