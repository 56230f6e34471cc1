// src/registry/table.rs

use std::collections::HashSet;

use crate::models::navigation::RouteDescriptor;

/// A tabela canônica e ordenada de rotas do console.
///
/// Montada uma vez na subida do processo e só lida dali em diante; é ela
/// que diz quais paths existem, como cada um se chama, que ícone o
/// representa e quem pode alcançá-lo. A ordem de declaração é a ordem do
/// menu; ninguém reordena depois.
pub struct RouteRegistry {
    routes: Vec<RouteDescriptor>,
}

impl RouteRegistry {
    /// Valida e constrói a tabela.
    ///
    /// Entrada malformada é erro de configuração: diagnóstico no log e a
    /// rota fica de fora. Nunca entra em pânico: um path duplicado no
    /// deploy não pode derrubar a navegação inteira.
    pub fn new(declared: Vec<RouteDescriptor>) -> Self {
        let mut seen: HashSet<String> = HashSet::new();
        let mut routes = Vec::with_capacity(declared.len());

        for descriptor in declared {
            // Rota sem papel algum é inalcançável por definição.
            if descriptor.permitted.is_empty() {
                tracing::warn!(
                    path = %descriptor.path,
                    "Rota sem papéis permitidos descartada (configuração morta)"
                );
                continue;
            }

            // Path duplicado: vale a primeira declaração.
            if !seen.insert(descriptor.path.clone()) {
                tracing::warn!(
                    path = %descriptor.path,
                    "Rota com path duplicado descartada (a primeira declaração prevalece)"
                );
                continue;
            }

            // Config contraditória: restrita, mas admitindo papéis comuns
            // ou o anônimo. A rota fica, e o resolver continua exigindo o
            // papel elevado em runtime, então os extras nunca passam.
            if descriptor.restricted && !descriptor.permitted.names_only_elevated() {
                tracing::warn!(
                    path = %descriptor.path,
                    "Rota restrita admite além do papel elevado; os demais não terão acesso"
                );
            }

            routes.push(descriptor);
        }

        Self { routes }
    }

    /// Sequência completa, na ordem de declaração.
    pub fn iter(&self) -> std::slice::Iter<'_, RouteDescriptor> {
        self.routes.iter()
    }

    /// Busca por igualdade exata de path.
    pub fn find(&self, path: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.path == path)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::navigation::{PermittedRoles, Role};
    use crate::registry::catalog;

    fn route(path: &str, permitted: PermittedRoles, restricted: bool) -> RouteDescriptor {
        catalog::route(path, "Tela", "widgets", "admin", permitted, restricted)
    }

    #[test]
    fn ordem_de_declaracao_e_preservada() {
        let registry = RouteRegistry::new(vec![
            route("/b", PermittedRoles::only([Role::Admin]), false),
            route("/a", PermittedRoles::only([Role::Admin]), false),
            route("/c", PermittedRoles::only([Role::Admin]), false),
        ]);

        let paths: Vec<&str> = registry.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, ["/b", "/a", "/c"]);
    }

    #[test]
    fn path_duplicado_e_descartado_mantendo_o_primeiro() {
        let registry = RouteRegistry::new(vec![
            route("/vendas", PermittedRoles::only([Role::Admin]), false),
            route("/vendas", PermittedRoles::only([Role::Atendente]), false),
        ]);

        assert_eq!(registry.len(), 1);
        let survivor = registry.find("/vendas").unwrap();
        assert!(survivor.permitted.contains(Role::Admin));
        assert!(!survivor.permitted.contains(Role::Atendente));
    }

    #[test]
    fn rota_sem_papeis_e_descartada() {
        let registry = RouteRegistry::new(vec![
            route("/fantasma", PermittedRoles::only([]), false),
            route("/real", PermittedRoles::only([Role::Admin]), false),
        ]);

        assert_eq!(registry.len(), 1);
        assert!(registry.find("/fantasma").is_none());
        assert!(registry.find("/real").is_some());
    }

    #[test]
    fn rota_restrita_inconsistente_permanece_na_tabela() {
        // O diagnóstico sai no log; quem barra os papéis comuns é o
        // resolver, em runtime.
        let registry = RouteRegistry::new(vec![route(
            "/empresas",
            PermittedRoles::only([Role::Superadmin, Role::Admin]),
            true,
        )]);

        assert_eq!(registry.len(), 1);
        assert!(registry.find("/empresas").unwrap().restricted);
    }

    #[test]
    fn rota_restrita_com_marcacao_anonima_tambem_permanece() {
        // Mesmo tratamento da lista com papéis comuns: diagnóstico no log
        // e a rota segue na tabela.
        let registry = RouteRegistry::new(vec![route(
            "/empresas",
            PermittedRoles::with_anonymous([Role::Superadmin]),
            true,
        )]);

        assert_eq!(registry.len(), 1);
        assert!(registry.find("/empresas").unwrap().restricted);
    }

    #[test]
    fn busca_e_por_igualdade_exata() {
        let registry = RouteRegistry::new(vec![route(
            "/dashboard",
            PermittedRoles::only([Role::Admin]),
            false,
        )]);

        assert!(registry.find("/dashboard").is_some());
        assert!(registry.find("/dashboard/").is_none());
        assert!(registry.find("dashboard").is_none());
        assert!(registry.find("/DASHBOARD").is_none());
    }
}
