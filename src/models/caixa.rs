// src/models/caixa.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

// 1. A fotografia da sessão de caixa corrente, empurrada pelo backend de
// negócio. O shell não abre nem fecha caixa; só computa resumos em cima
// do que recebeu por último.
#[derive(Debug, Clone)]
pub struct CaixaSession {
    pub id: Uuid,
    pub opened_at: DateTime<Utc>,
    /// Ausente enquanto o caixa está aberto.
    pub closed_at: Option<DateTime<Utc>>,
    pub entradas: Decimal, // Vendas da sessão
    pub saidas: Decimal,   // Despesas da sessão
}

// 2. Tempo de caixa decomposto. Sem formatação de locale aqui: quem
// mostra "3h 20min" é o front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionDuration {
    #[schema(example = 3)]
    pub hours: i64,

    #[schema(example = 20)]
    pub minutes: i64,

    #[schema(example = 200)]
    pub total_minutes: i64,
}

// 3. As duas fatias da pizza (entradas × saídas), em percentuais com uma
// casa decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CashSplit {
    #[schema(example = "60.0")]
    pub entradas_pct: Decimal,

    #[schema(example = "40.0")]
    pub saidas_pct: Decimal,
}

// 4. O resumo pronto que os cards de status e a pizza do console exibem.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaixaStatus {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub session_id: Uuid,

    pub is_open: bool,

    pub opened_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,

    pub duration: SessionDuration,

    #[schema(example = "600.00")]
    pub entradas: Decimal,

    #[schema(example = "400.00")]
    pub saidas: Decimal,

    pub split: CashSplit,
}
