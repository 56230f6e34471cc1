// src/registry.rs

pub mod catalog;
pub mod table;

pub use table::RouteRegistry;
