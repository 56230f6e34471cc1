// src/registry/catalog.rs

use std::sync::Arc;

use crate::models::navigation::{PermittedRoles, Role, RouteDescriptor};
use crate::models::view::{StaticView, ViewContent, ViewSlot};
use crate::registry::RouteRegistry;

/// Chrome compartilhado das telas autenticadas do console.
pub const LAYOUT_ADMIN: &str = "admin";
/// Chrome das telas de entrada (login e cadastro).
pub const LAYOUT_AUTH: &str = "auth";

/// Tabela de rotas do console, na ordem em que o menu as exibe.
///
/// Declarar aqui é a única forma de uma tela existir para a navegação;
/// nada é registrado em runtime.
pub fn console_routes() -> RouteRegistry {
    RouteRegistry::new(vec![
        route(
            "/dashboard",
            "Dashboard",
            "dashboard",
            LAYOUT_ADMIN,
            PermittedRoles::only([Role::Admin]),
            false,
        ),
        route(
            "/checkout",
            "Caixa",
            "point_of_sale",
            LAYOUT_ADMIN,
            PermittedRoles::only([Role::Atendente, Role::Admin]),
            false,
        ),
        route(
            "/vendas",
            "Vendas",
            "attach_money",
            LAYOUT_ADMIN,
            PermittedRoles::only([Role::Atendente, Role::Admin]),
            false,
        ),
        route(
            "/despesas",
            "Despesas",
            "money_off",
            LAYOUT_ADMIN,
            PermittedRoles::only([Role::Admin]),
            false,
        ),
        route(
            "/produtos",
            "Produtos",
            "inventory_2",
            LAYOUT_ADMIN,
            PermittedRoles::only([Role::Atendente, Role::Admin]),
            false,
        ),
        route(
            "/servicos",
            "Serviços",
            "home_repair_service",
            LAYOUT_ADMIN,
            PermittedRoles::only([Role::Atendente, Role::Admin]),
            false,
        ),
        // Administração da plataforma: exige o papel elevado, nunca um
        // admin comum de loja.
        route(
            "/empresas",
            "Empresas",
            "business",
            LAYOUT_ADMIN,
            PermittedRoles::only([Role::Superadmin]),
            true,
        ),
        route(
            "/login-register",
            "Entrar",
            "login",
            LAYOUT_AUTH,
            PermittedRoles::with_anonymous([Role::Atendente, Role::Admin, Role::Visitante]),
            false,
        ),
    ])
}

/// Monta um descritor cuja view é servida como bundle estático.
pub(crate) fn route(
    path: &str,
    name: &str,
    icon: &str,
    layout: &str,
    permitted: PermittedRoles,
    restricted: bool,
) -> RouteDescriptor {
    let view = ViewSlot::deferred(Arc::new(StaticView::new(ViewContent {
        title: name.to_string(),
        bundle: format!("views{path}.js"),
    })));

    RouteDescriptor {
        path: path.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        layout: layout.to_string(),
        view,
        permitted,
        restricted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabela_padrao_nao_descarta_nenhuma_rota() {
        let registry = console_routes();
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn empresas_e_restrita_ao_papel_elevado() {
        let registry = console_routes();
        let empresas = registry.find("/empresas").unwrap();

        assert!(empresas.restricted);
        assert!(empresas.permitted.contains(Role::Superadmin));
        assert!(!empresas.permitted.contains(Role::Admin));
    }

    #[test]
    fn login_e_a_unica_rota_anonima() {
        let registry = console_routes();
        let anonimas: Vec<&str> = registry
            .iter()
            .filter(|r| r.permitted.allows_anonymous())
            .map(|r| r.path.as_str())
            .collect();

        assert_eq!(anonimas, ["/login-register"]);
    }

    #[test]
    fn checkout_usa_o_layout_administrativo() {
        let registry = console_routes();
        let checkout = registry.find("/checkout").unwrap();

        assert_eq!(checkout.layout, LAYOUT_ADMIN);
        assert!(checkout.permitted.contains(Role::Atendente));
    }
}
