// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Navegação ---
        handlers::navigation::get_menu,
        handlers::navigation::get_authorization,
        handlers::navigation::get_view,

        // --- Caixa ---
        handlers::caixa::get_status,
        handlers::caixa::put_session,
    ),
    components(
        schemas(
            // --- Navegação ---
            models::navigation::Role,
            models::navigation::MenuEntry,
            models::view::ViewContent,

            // --- Caixa ---
            models::caixa::CaixaStatus,
            models::caixa::SessionDuration,
            models::caixa::CashSplit,

            // --- Payloads ---
            handlers::navigation::AuthorizationDecision,
            handlers::caixa::IngestSessionPayload,
        )
    ),
    tags(
        (name = "Navegação", description = "Menu, guarda de rotas e entrega de views do console"),
        (name = "Caixa", description = "Resumos da sessão de caixa corrente")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "session_role",
            SecurityScheme::ApiKey(
                ApiKey::Header(ApiKeyValue::new("x-user-role"))
            ),
        );
    }
}
