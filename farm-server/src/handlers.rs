//! Route handlers.

use crate::AppState;
use axum::{extract::State, Json};
use chrono::Utc;
use farm_utils::dates::iso_timestamp;
use serde::Serialize;
use std::sync::Arc;

pub const BANNER: &str = "🌱 Smart Farming API - String Beans Edition";
pub const API_VERSION: &str = "1.0.0";

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Seconds
    pub uptime: f64,
    pub timestamp: String,
}

pub async fn root() -> Json<RootResponse> {
    log::debug!("GET /");
    Json(RootResponse {
        message: BANNER,
        status: "Running",
        version: API_VERSION,
        timestamp: iso_timestamp(Utc::now()),
    })
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    log::debug!("GET /health");
    Json(HealthResponse {
        status: "OK",
        uptime: state.uptime(),
        timestamp: iso_timestamp(Utc::now()),
    })
}
