// src/services/caixa_service.rs

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::{
    common::error::AppError,
    models::caixa::{CaixaSession, CaixaStatus, CashSplit, SessionDuration},
};

/// Guarda o último retrato da sessão de caixa enviado pelo backend de
/// negócio e calcula os resumos que os cards e o gráfico de pizza exibem.
#[derive(Clone)]
pub struct CaixaService {
    session: Arc<RwLock<Option<CaixaSession>>>,
}

impl CaixaService {
    pub fn new() -> Self {
        Self {
            session: Arc::new(RwLock::new(None)),
        }
    }

    /// Substitui o retrato corrente pelo recém-chegado e devolve o resumo
    /// já calculado sobre ele.
    pub async fn ingest(&self, session: CaixaSession) -> CaixaStatus {
        let status = Self::summarize(&session, Utc::now());
        *self.session.write().await = Some(session);
        status
    }

    /// Resumo da sessão corrente. Antes do primeiro ingest não existe
    /// sessão alguma; isso é um resultado normal, não um defeito.
    pub async fn status(&self) -> Result<CaixaStatus, AppError> {
        let guard = self.session.read().await;
        match guard.as_ref() {
            Some(session) => Ok(Self::summarize(session, Utc::now())),
            None => Err(AppError::CaixaUnavailable),
        }
    }

    // O resumo inteiro é função pura de (sessão, agora); o relógio entra
    // como argumento para os testes fixarem o instante.
    fn summarize(session: &CaixaSession, now: DateTime<Utc>) -> CaixaStatus {
        let end = session.closed_at.unwrap_or(now);

        CaixaStatus {
            session_id: session.id,
            is_open: session.closed_at.is_none(),
            opened_at: session.opened_at,
            closed_at: session.closed_at,
            duration: duration_between(session.opened_at, end),
            entradas: session.entradas,
            saidas: session.saidas,
            split: cash_split(session.entradas, session.saidas),
        }
    }
}

/// Minutos corridos entre a abertura e o fim (ou o agora), divididos em
/// horas cheias e resto. Relógio atrasado nunca produz duração negativa.
pub fn duration_between(opened_at: DateTime<Utc>, end: DateTime<Utc>) -> SessionDuration {
    let total_minutes = (end - opened_at).num_minutes().max(0);

    SessionDuration {
        hours: total_minutes / 60,
        minutes: total_minutes % 60,
        total_minutes,
    }
}

/// Fatias do gráfico de pizza: participação percentual de entradas e de
/// saídas sobre a soma das duas, com uma casa decimal.
///
/// Pizza não tem fatia negativa: soma zero, valores negativos ou uma
/// soma além do alcance do `Decimal` zeram as duas fatias.
pub fn cash_split(entradas: Decimal, saidas: Decimal) -> CashSplit {
    let zerado = CashSplit {
        entradas_pct: Decimal::ZERO,
        saidas_pct: Decimal::ZERO,
    };

    if entradas.is_sign_negative() || saidas.is_sign_negative() {
        return zerado;
    }

    // Soma checada: estouro de Decimal é valor fora do domínio, não pânico.
    let total = match entradas.checked_add(saidas) {
        Some(total) if total > Decimal::ZERO => total,
        _ => return zerado,
    };

    // Divide antes de multiplicar: o quociente fica em [0, 1] e o
    // percentual nunca estoura, mesmo com montantes no limite do Decimal.
    CashSplit {
        entradas_pct: (entradas / total * Decimal::ONE_HUNDRED).round_dp(1),
        saidas_pct: (saidas / total * Decimal::ONE_HUNDRED).round_dp(1),
    }
}
