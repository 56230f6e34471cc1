// src/common/i18n.rs

use std::collections::HashMap;

// Os idiomas que o catálogo de mensagens conhece. Enum fechado: qualquer
// outra tag do Accept-Language cai no padrão.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    /// Português brasileiro, o idioma de fato do console.
    #[default]
    Pt,
    En,
}

impl Lang {
    // Converte uma tag negociada ("pt-BR", "en-US", "en") no idioma
    // suportado. "pt-BR" -> split vira ["pt", "BR"] -> next() pega "pt".
    pub fn from_tag(tag: &str) -> Option<Lang> {
        match tag.split('-').next().unwrap_or(tag) {
            "pt" => Some(Lang::Pt),
            "en" => Some(Lang::En),
            _ => None,
        }
    }
}

/// Catálogo em memória das mensagens que a API devolve ao usuário final.
///
/// As chaves são estáveis; os handlers nunca montam texto de erro na mão,
/// sempre passam por aqui com o idioma do extrator `Locale`.
#[derive(Clone)]
pub struct I18nStore {
    pt: HashMap<&'static str, &'static str>,
    en: HashMap<&'static str, &'static str>,
}

impl I18nStore {
    pub fn new() -> Self {
        let pt = HashMap::from([
            ("validation", "Um ou mais campos são inválidos."),
            ("access_denied", "Acesso negado para esta rota."),
            ("caixa_unavailable", "Nenhuma sessão de caixa disponível ainda."),
            ("view_load_failed", "Falha ao carregar a view solicitada."),
            ("internal", "Ocorreu um erro inesperado."),
        ]);

        let en = HashMap::from([
            ("validation", "One or more fields are invalid."),
            ("access_denied", "Access denied for this route."),
            ("caixa_unavailable", "No cash register session available yet."),
            ("view_load_failed", "Failed to load the requested view."),
            ("internal", "An unexpected error occurred."),
        ]);

        Self { pt, en }
    }

    // Busca a mensagem no idioma pedido, caindo para o português quando a
    // tradução não existe. Chave desconhecida vira a mensagem genérica.
    pub fn message(&self, lang: Lang, key: &str) -> &'static str {
        let table = match lang {
            Lang::Pt => &self.pt,
            Lang::En => &self.en,
        };

        table
            .get(key)
            .or_else(|| self.pt.get(key))
            .copied()
            .unwrap_or("Ocorreu um erro inesperado.")
    }
}

impl Default for I18nStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_com_regiao_resolve_o_idioma_base() {
        assert_eq!(Lang::from_tag("pt-BR"), Some(Lang::Pt));
        assert_eq!(Lang::from_tag("en-US"), Some(Lang::En));
        assert_eq!(Lang::from_tag("en"), Some(Lang::En));
        assert_eq!(Lang::from_tag("fr-CA"), None);
    }

    #[test]
    fn mensagem_cai_para_portugues_em_chave_sem_traducao() {
        let store = I18nStore::new();
        assert_eq!(
            store.message(Lang::En, "access_denied"),
            "Access denied for this route."
        );
        assert_eq!(
            store.message(Lang::En, "chave_que_nao_existe"),
            "Ocorreu um erro inesperado."
        );
        assert_eq!(
            store.message(Lang::Pt, "validation"),
            "Um ou mais campos são inválidos."
        );
    }
}
