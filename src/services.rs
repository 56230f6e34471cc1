// src/services.rs

pub mod caixa_service;
pub mod navigation_service;

pub use caixa_service::CaixaService;
pub use navigation_service::NavigationService;
