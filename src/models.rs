// src/models.rs

pub mod caixa;
pub mod navigation;
pub mod view;
