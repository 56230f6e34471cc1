// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::common::i18n::{I18nStore, Lang};

// Nosso tipo de erro de domínio, com `thiserror` para melhor ergonomia.
// A mensagem do `#[error]` é o que vai para o log; o que o cliente vê
// sai do catálogo i18n via `to_api_error`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Acesso negado à rota '{0}'")]
    AccessDenied(String),

    #[error("Nenhuma sessão de caixa ingerida até agora")]
    CaixaUnavailable,

    #[error("Falha ao carregar a view de '{path}'")]
    ViewLoadFailed {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    // Variante genérica para qualquer outro erro inesperado.
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno do servidor")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Converte o erro de domínio na resposta HTTP localizada.
    ///
    /// O detalhe técnico fica no log; o cliente recebe a mensagem do
    /// catálogo mais, quando fizer sentido, um bloco `details`.
    pub fn to_api_error(&self, lang: Lang, store: &I18nStore) -> ApiError {
        match self {
            // Retornamos todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = serde_json::Map::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), json!(messages));
                }

                ApiError {
                    status: StatusCode::BAD_REQUEST,
                    error: store.message(lang, "validation").to_string(),
                    details: Some(json!(details)),
                }
            }

            // Negação é resultado normal de navegação, nunca um 500.
            AppError::AccessDenied(path) => ApiError {
                status: StatusCode::FORBIDDEN,
                error: store.message(lang, "access_denied").to_string(),
                details: Some(json!({ "path": path })),
            },

            AppError::CaixaUnavailable => ApiError {
                status: StatusCode::NOT_FOUND,
                error: store.message(lang, "caixa_unavailable").to_string(),
                details: None,
            },

            AppError::ViewLoadFailed { path, source } => {
                tracing::error!(path = %path, error = %source, "Falha ao carregar view");
                ApiError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: store.message(lang, "view_load_failed").to_string(),
                    details: Some(json!({ "path": path })),
                }
            }

            AppError::Internal(source) => {
                tracing::error!(error = %source, "Erro interno do servidor");
                ApiError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: store.message(lang, "internal").to_string(),
                    details: None,
                }
            }
        }
    }
}

// A forma única de erro que sai pela API, já com status e mensagem
// prontos. Os extratores também rejeitam com ela.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => Json(json!({ "error": self.error, "details": details })),
            None => Json(json!({ "error": self.error })),
        };

        (self.status, body).into_response()
    }
}
