// src/models/view.rs

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::OnceCell;
use utoipa::ToSchema;

// O conteúdo realizado de uma view. Para o núcleo de navegação isso é um
// dado opaco: quem interpreta título e bundle é o front-end do console.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ViewContent {
    #[schema(example = "Caixa")]
    pub title: String,

    /// Identificador do bundle que o front-end busca para montar a tela.
    #[schema(example = "views/checkout.js")]
    pub bundle: String,
}

/// Capacidade de carregar uma view sob demanda.
///
/// O mecanismo real de code-splitting mora no colaborador externo; aqui
/// fica só a costura. O loader pode falhar (rede, bundle ausente) e a
/// falha volta como erro comum, nunca como pânico.
#[async_trait]
pub trait ViewLoader: Send + Sync {
    async fn load(&self) -> anyhow::Result<ViewContent>;
}

// Loader trivial: devolve um conteúdo já conhecido. É o que a tabela de
// rotas usa enquanto as views não têm bundles servidos de fora.
pub struct StaticView {
    content: ViewContent,
}

impl StaticView {
    pub fn new(content: ViewContent) -> Self {
        Self { content }
    }
}

#[async_trait]
impl ViewLoader for StaticView {
    async fn load(&self) -> anyhow::Result<ViewContent> {
        Ok(self.content.clone())
    }
}

/// Slot de view com dois estados: "não carregada" (guarda o loader) e
/// "carregada" (guarda o conteúdo realizado).
///
/// A transição acontece no máximo uma vez, na primeira navegação que o
/// guard autorizar; a decisão de acesso vem sempre antes do load.
/// Carregamentos concorrentes da primeira vez colapsam em um só; uma
/// falha deixa o slot como estava, e a navegação seguinte tenta de novo.
pub struct ViewSlot {
    loader: Arc<dyn ViewLoader>,
    loaded: OnceCell<Arc<ViewContent>>,
}

impl ViewSlot {
    pub fn deferred(loader: Arc<dyn ViewLoader>) -> Self {
        Self {
            loader,
            loaded: OnceCell::new(),
        }
    }

    /// Resolve o conteúdo, disparando o loader só na primeira vez.
    pub async fn resolve(&self) -> anyhow::Result<Arc<ViewContent>> {
        let content = self
            .loaded
            .get_or_try_init(|| async {
                let loaded = self.loader.load().await?;
                Ok::<_, anyhow::Error>(Arc::new(loaded))
            })
            .await?;

        Ok(content.clone())
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.initialized()
    }
}

impl fmt::Debug for ViewSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewSlot")
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
