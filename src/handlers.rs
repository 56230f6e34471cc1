// src/handlers.rs

pub mod caixa;
pub mod navigation;
