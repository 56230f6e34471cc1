// Testes de integração dos endpoints de caixa: guarda pela política da
// rota /checkout, ingestão validada e resumos calculados.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use painel_backend::{create_router, AppState};
use serde_json::{json, Value};
use tower::util::ServiceExt;
use uuid::Uuid;

fn app() -> Router {
    let state = AppState::new().expect("Falha ao montar o estado de teste");
    create_router(state)
}

async fn get_status(app: Router, role: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("GET").uri("/api/caixa/status");
    if let Some(role) = role {
        builder = builder.header("x-user-role", role);
    }

    let response = app
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn put_session(app: Router, role: &str, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("PUT")
        .uri("/api/caixa/sessao")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-user-role", role)
        .body(Body::from(payload.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn status_sem_sessao_ingerida_e_404() {
    let (status, body) = get_status(app(), Some("atendente")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Nenhuma sessão de caixa disponível ainda.");
}

#[tokio::test]
async fn caixa_segue_a_politica_da_rota_checkout() {
    let app = app();

    // Anônimo e visitante não operam caixa; atendente e admin sim.
    for role in [None, Some("visitante")] {
        let (status, body) = get_status(app.clone(), role).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "papel {role:?}");
        assert_eq!(body["details"]["path"], "/checkout");
    }

    for role in ["atendente", "admin"] {
        let (status, _) = get_status(app.clone(), Some(role)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "papel {role}");
    }
}

#[tokio::test]
async fn ingest_devolve_o_resumo_e_alimenta_o_status() {
    let app = app();
    let session_id = Uuid::new_v4();

    let (status, body) = put_session(
        app.clone(),
        "atendente",
        json!({
            "sessionId": session_id.to_string(),
            "openedAt": "2026-08-25T08:00:00Z",
            "closedAt": "2026-08-25T10:15:00Z",
            "entradas": 150.0,
            "saidas": 50.0,
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sessionId"], session_id.to_string());
    assert_eq!(body["isOpen"], false);
    assert_eq!(body["duration"]["hours"].as_i64().unwrap(), 2);
    assert_eq!(body["duration"]["minutes"].as_i64().unwrap(), 15);
    assert_eq!(body["duration"]["totalMinutes"].as_i64().unwrap(), 135);
    assert_eq!(body["split"]["entradasPct"].as_f64().unwrap(), 75.0);
    assert_eq!(body["split"]["saidasPct"].as_f64().unwrap(), 25.0);

    // O mesmo retrato passa a responder no status.
    let (status, body) = get_status(app, Some("admin")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sessionId"], session_id.to_string());
    assert_eq!(body["entradas"].as_f64().unwrap(), 150.0);
}

#[tokio::test]
async fn sessao_aberta_resume_com_o_relogio_corrente() {
    let (status, body) = put_session(
        app(),
        "admin",
        json!({
            "sessionId": Uuid::new_v4().to_string(),
            "openedAt": "2026-08-25T08:00:00Z",
            "entradas": 10.0,
            "saidas": 10.0,
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isOpen"], true);
    assert!(body["closedAt"].is_null());
    assert!(body["duration"]["totalMinutes"].as_i64().unwrap() >= 0);
    assert_eq!(body["split"]["entradasPct"].as_f64().unwrap(), 50.0);
}

#[tokio::test]
async fn montantes_gigantes_nao_derrubam_a_ingestao() {
    // Não-negativos no limite do Decimal passam na validação; a soma
    // estoura e o resumo degrada para fatias zeradas em vez de falhar.
    let (status, body) = put_session(
        app(),
        "admin",
        json!({
            "sessionId": Uuid::new_v4().to_string(),
            "openedAt": "2026-08-25T08:00:00Z",
            "entradas": 7e28,
            "saidas": 7e28,
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["split"]["entradasPct"].as_f64().unwrap(), 0.0);
    assert_eq!(body["split"]["saidasPct"].as_f64().unwrap(), 0.0);
}

#[tokio::test]
async fn valores_negativos_sao_rejeitados() {
    let (status, body) = put_session(
        app(),
        "atendente",
        json!({
            "sessionId": Uuid::new_v4().to_string(),
            "openedAt": "2026-08-25T08:00:00Z",
            "entradas": -10.0,
            "saidas": 5.0,
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Um ou mais campos são inválidos.");
    assert!(body["details"]["entradas"].is_array());
}

#[tokio::test]
async fn fechamento_antes_da_abertura_e_rejeitado() {
    let (status, body) = put_session(
        app(),
        "atendente",
        json!({
            "sessionId": Uuid::new_v4().to_string(),
            "openedAt": "2026-08-25T10:00:00Z",
            "closedAt": "2026-08-25T08:00:00Z",
            "entradas": 0.0,
            "saidas": 0.0,
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["closedAt"].is_array());
}

#[tokio::test]
async fn payload_sem_identificacao_e_rejeitado() {
    let (status, body) = put_session(
        app(),
        "admin",
        json!({
            "openedAt": "2026-08-25T08:00:00Z",
            "entradas": 1.0,
            "saidas": 1.0,
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Um ou mais campos são inválidos.");
    // A mensagem de validação aponta o campo ausente.
    assert!(body["details"].to_string().contains("sessionId"));
}

#[tokio::test]
async fn ingest_barrado_para_papel_sem_caixa() {
    let (status, body) = put_session(
        app(),
        "visitante",
        json!({
            "sessionId": Uuid::new_v4().to_string(),
            "openedAt": "2026-08-25T08:00:00Z",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Acesso negado para esta rota.");
}
