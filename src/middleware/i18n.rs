// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

use crate::common::i18n::Lang;

// Nosso extrator de idioma. Sem Accept-Language (ou só com tags que o
// catálogo não conhece) vale o português.
pub struct Locale(pub Lang);

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let lang = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|header_value| header_value.to_str().ok())
            .and_then(|header_str| {
                // As tags chegam em ordem de preferência (ex: "en-US, pt;q=0.8");
                // vale a primeira que o catálogo conhece.
                accept_language::parse(header_str)
                    .iter()
                    .find_map(|tag| Lang::from_tag(tag))
            })
            .unwrap_or_default();

        Ok(Locale(lang))
    }
}
