// src/middleware/session.rs

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};

use crate::common::error::ApiError; // Usamos o nosso ApiError para rejeição
use crate::models::navigation::{CurrentUser, Role};

// O nome do cabeçalho que o gateway de sessão injeta em cada requisição.
const USER_ROLE_HEADER: &str = "x-user-role";

// O extrator do usuário corrente.
// Cabeçalho ausente é navegação anônima; presente, o slug precisa casar
// exatamente com um papel conhecido.
#[derive(Debug, Clone)]
pub struct SessionUser(pub CurrentUser);

impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    // Usamos ApiError como rejeição, pois ele já implementa IntoResponse
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts.headers.get(USER_ROLE_HEADER);

        match header_value {
            Some(value) => {
                // Tenta ler o valor do cabeçalho como string
                let slug = value.to_str().map_err(|_| ApiError {
                    status: StatusCode::BAD_REQUEST,
                    error: "Cabeçalho x-user-role contém caracteres inválidos.".to_string(),
                    details: None,
                })?;

                // Sem aparar nem normalizar: o slug casa exato ou é entrada
                // malformada do gateway.
                let role = Role::from_slug(slug).ok_or_else(|| ApiError {
                    status: StatusCode::BAD_REQUEST,
                    error: format!(
                        "Cabeçalho x-user-role inválido ('{slug}' não é um papel conhecido)."
                    ),
                    details: None,
                })?;

                Ok(SessionUser(CurrentUser::Authenticated(role)))
            }
            // Sem cabeçalho: visitante não autenticado, não um erro.
            None => Ok(SessionUser(CurrentUser::Anonymous)),
        }
    }
}
