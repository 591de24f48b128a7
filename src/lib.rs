//! Storefront for a VPS hosting reseller: plan pricing, checkout links and
//! the pricing pages that show them.

pub mod api;
pub mod config;
pub mod handlers;
pub mod models;
pub mod pricing;
pub mod routes;
pub mod services;
pub mod templates;
pub mod utils;
