// src/models/navigation.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::view::ViewSlot;

// Os papéis que o console reconhece. Enum fechado de propósito: um slug
// fora daqui é entrada malformada do gateway de sessão, nunca um papel
// implícito. Não existe hierarquia: "admin" jamais vale por "superadmin".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Papel elevado e singular, dono da gestão de empresas.
    Superadmin,
    Admin,
    Atendente,
    Visitante,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Superadmin,
        Role::Admin,
        Role::Atendente,
        Role::Visitante,
    ];

    // Slug usado no cabeçalho `x-user-role` e em qualquer JSON.
    pub fn slug(&self) -> &'static str {
        match self {
            Role::Superadmin => "superadmin",
            Role::Admin => "admin",
            Role::Atendente => "atendente",
            Role::Visitante => "visitante",
        }
    }

    // Comparação exata, caso-sensível. "Admin" ou "ADMIN" não casam.
    pub fn from_slug(slug: &str) -> Option<Role> {
        match slug {
            "superadmin" => Some(Role::Superadmin),
            "admin" => Some(Role::Admin),
            "atendente" => Some(Role::Atendente),
            "visitante" => Some(Role::Visitante),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Quem está navegando agora: um papel autenticado ou o estado anônimo.
///
/// O anônimo é uma variante própria e explícita, nunca um null no meio
/// da lista de papéis de uma rota.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentUser {
    Anonymous,
    Authenticated(Role),
}

impl CurrentUser {
    pub fn role(&self) -> Option<Role> {
        match self {
            CurrentUser::Anonymous => None,
            CurrentUser::Authenticated(role) => Some(*role),
        }
    }
}

/// Conjunto de papéis que alcançam uma rota, mais a marcação explícita
/// de acesso anônimo. Construído junto com a tabela e imutável depois.
#[derive(Debug, Clone)]
pub struct PermittedRoles {
    roles: Vec<Role>,
    allow_anonymous: bool,
}

impl PermittedRoles {
    /// Apenas papéis autenticados alcançam a rota.
    pub fn only(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
            allow_anonymous: false,
        }
    }

    /// Além dos papéis listados, o visitante não autenticado também entra.
    pub fn with_anonymous(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
            allow_anonymous: true,
        }
    }

    // Conjunto vazio = rota morta: ninguém a alcança. A tabela descarta
    // essas entradas na construção.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty() && !self.allow_anonymous
    }

    pub fn allows_anonymous(&self) -> bool {
        self.allow_anonymous
    }

    pub fn contains(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    // Pertencimento exato: anônimo só entra pela marcação explícita,
    // autenticado só entra se o papel estiver listado.
    pub fn admits(&self, user: &CurrentUser) -> bool {
        match user {
            CurrentUser::Anonymous => self.allow_anonymous,
            CurrentUser::Authenticated(role) => self.roles.contains(role),
        }
    }

    // Usado na validação de rotas restritas: só o papel elevado listado,
    // sem marcação anônima.
    pub fn names_only_elevated(&self) -> bool {
        !self.allow_anonymous && self.roles.iter().all(|role| *role == Role::Superadmin)
    }
}

/// Descritor de uma rota navegável do console.
///
/// A tabela inteira é montada uma vez na subida do processo; depois disso
/// ninguém cria, altera ou remove descritores.
#[derive(Debug)]
pub struct RouteDescriptor {
    /// Segmento de URL, único dentro da tabela (ex.: "/checkout").
    pub path: String,
    /// Rótulo exibido no menu. Não precisa ser único.
    pub name: String,
    /// Identificador opaco do ícone; quem resolve é o front-end.
    pub icon: String,
    /// Agrupa rotas sob o mesmo chrome (ex.: "admin", "auth"). A tabela
    /// só carrega o dado; não impõe nada sobre ele.
    pub layout: String,
    /// Referência diferida à view; ver `models::view`.
    pub view: ViewSlot,
    pub permitted: PermittedRoles,
    /// Exige o papel elevado (superadmin), acima da lista geral.
    pub restricted: bool,
}

// Projeção pública de uma rota para o renderizador de menu. `view` e o
// conjunto de papéis são internos à autorização e nunca saem por aqui.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    #[schema(example = "/checkout")]
    pub path: String,

    #[schema(example = "Caixa")]
    pub name: String,

    #[schema(example = "point_of_sale")]
    pub icon: String,

    #[schema(example = "admin")]
    pub layout: String,
}

impl From<&RouteDescriptor> for MenuEntry {
    fn from(route: &RouteDescriptor) -> Self {
        Self {
            path: route.path.clone(),
            name: route.name.clone(),
            icon: route.icon.clone(),
            layout: route.layout.clone(),
        }
    }
}
