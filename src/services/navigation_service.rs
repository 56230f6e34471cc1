// src/services/navigation_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    models::navigation::{CurrentUser, MenuEntry, Role, RouteDescriptor},
    models::view::ViewContent,
    registry::RouteRegistry,
};

/// Resolve o que cada usuário enxerga e alcança na navegação.
///
/// Computação pura sobre a tabela imutável: o serviço não guarda estado
/// entre chamadas, e entradas iguais produzem sempre a mesma resposta.
#[derive(Clone)]
pub struct NavigationService {
    registry: Arc<RouteRegistry>,
}

impl NavigationService {
    pub fn new(registry: Arc<RouteRegistry>) -> Self {
        Self { registry }
    }

    /// Subsequência da tabela visível ao usuário, na ordem declarada.
    ///
    /// Nada de reordenar, agrupar ou deduplicar: a ordem da tabela é a
    /// ordem do menu.
    pub fn visible_routes(&self, user: &CurrentUser) -> Vec<&RouteDescriptor> {
        self.registry
            .iter()
            .filter(|route| Self::admits(route, user))
            .collect()
    }

    /// Projeção das rotas visíveis para o renderizador de menu.
    pub fn menu(&self, user: &CurrentUser) -> Vec<MenuEntry> {
        self.visible_routes(user)
            .into_iter()
            .map(MenuEntry::from)
            .collect()
    }

    /// Decide uma navegação direta a um path arbitrário.
    ///
    /// Path inexistente e papel insuficiente recebem a mesma resposta:
    /// não. Quem precisar distinguir os dois casos consulta a tabela.
    pub fn is_authorized(&self, user: &CurrentUser, path: &str) -> bool {
        match self.registry.find(path) {
            Some(route) => Self::admits(route, user),
            None => false,
        }
    }

    /// Entrega a view de um path, carregando-a na primeira navegação.
    ///
    /// A checagem de acesso vem antes do gatilho de carga: usuário barrado
    /// não dispara download de bundle nenhum.
    pub async fn resolve_view(
        &self,
        user: &CurrentUser,
        path: &str,
    ) -> Result<Arc<ViewContent>, AppError> {
        let route = self
            .registry
            .find(path)
            .filter(|route| Self::admits(route, user))
            .ok_or_else(|| AppError::AccessDenied(path.to_string()))?;

        route
            .view
            .resolve()
            .await
            .map_err(|source| AppError::ViewLoadFailed {
                path: path.to_string(),
                source,
            })
    }

    // Regra única de admissão, compartilhada pelo menu e pela guarda de
    // rota. A marcação `restricted` soma uma exigência por cima da lista
    // geral: sem o papel elevado, a resposta é não, mesmo que a lista
    // cite outros papéis por erro de configuração.
    fn admits(route: &RouteDescriptor, user: &CurrentUser) -> bool {
        if route.restricted && user.role() != Some(Role::Superadmin) {
            return false;
        }
        route.permitted.admits(user)
    }
}
