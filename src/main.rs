//src/main.rs

use tokio::net::TcpListener;

use painel_backend::{create_router, AppState};

#[tokio::main]
async fn main() {
    // Inicializa o logger. RUST_LOG manda; sem ele, um padrão razoável.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "painel_backend=debug,axum=info".into()),
        )
        .with_target(false)
        .compact()
        .init();

    // Lida com o Result retornado por AppState::new()
    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new().expect("Falha ao inicializar o estado da aplicação.");

    let addr = app_state.bind_addr.clone();
    let app = create_router(app_state);

    // Inicia o servidor
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
