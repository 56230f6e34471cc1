// src/config.rs

use std::{env, sync::Arc};

use crate::{
    common::i18n::I18nStore,
    registry::{catalog, RouteRegistry},
    services::{CaixaService, NavigationService},
};

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RouteRegistry>,
    pub bind_addr: String,
    pub i18n_store: I18nStore,
    // Adicionamos os serviços ao estado, como discutido
    pub navigation_service: NavigationService,
    pub caixa_service: CaixaService,
}

impl AppState {
    // A assinatura retorna um Result!
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        // --- Monta a tabela de rotas e o gráfico de dependências ---
        // Entradas malformadas já saem daqui diagnosticadas e descartadas.
        let registry = Arc::new(catalog::console_routes());
        tracing::info!("✅ Tabela de rotas montada com {} rotas!", registry.len());

        let navigation_service = NavigationService::new(registry.clone());
        let caixa_service = CaixaService::new();

        // Retorna Ok com o estado montado
        Ok(Self {
            registry,
            bind_addr,
            i18n_store: I18nStore::new(),
            navigation_service,
            caixa_service,
        })
    }
}
