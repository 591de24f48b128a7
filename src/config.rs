use std::env;
use std::path::Path;

use crate::pricing::{DEFAULT_CONFIGURATOR_URL, DEFAULT_STORE_BASE_URL};

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_API_BASE_URL: &str = "";
pub const DEFAULT_API_TOKEN: &str = "";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "";
pub const FALLBACK_API_BASE_URL: &str = "http://localhost:5000";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        if let Err(e) = dotenvy::from_path(Path::new(path)) {
            tracing::warn!(%e, path, "Could not load env file");
        }
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_host() -> String {
    env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string())
}

pub fn get_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Base URL of the content API serving `/plans`
pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()))
}

pub fn get_api_token() -> String {
    env::var("API_TOKEN").unwrap_or_else(|_| DEFAULT_API_TOKEN.to_string())
}

/// Public origin of this site; empty keeps links site-relative
pub fn get_public_base_url() -> String {
    env::var("PUBLIC_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_PUBLIC_BASE_URL.to_string())
        .trim()
        .trim_end_matches('/')
        .to_string()
}

pub fn get_checkout_base_url() -> String {
    non_empty_var("CHECKOUT_BASE_URL").unwrap_or_else(|| DEFAULT_STORE_BASE_URL.to_string())
}

pub fn get_configurator_url() -> String {
    non_empty_var("CONFIGURATOR_URL").unwrap_or_else(|| DEFAULT_CONFIGURATOR_URL.to_string())
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        FALLBACK_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
