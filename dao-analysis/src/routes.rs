//! HTTP API routes.

use crate::analyzer::ProposalAnalyzer;
use crate::error::AnalysisError;
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Data sources reported with every successful analysis.
const DATA_SOURCES: &[&str] = &["historical_data", "live_insights", "sentiment_analysis"];

/// Application state.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<dyn ProposalAnalyzer>,
}

impl AppState {
    pub fn new(analyzer: Arc<dyn ProposalAnalyzer>) -> Self {
        Self { analyzer }
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/analyze", post(analyze_proposal))
        .with_state(state)
}

// ============ Analysis ============

/// A proposal submitted for analysis.
#[derive(Debug, Deserialize)]
pub struct ProposalRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub dao_name: Option<String>,
}

/// Flattened analysis verdict returned to clients.
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub likelihood_percentage: f64,
    pub likelihood_level: String,
    pub community_sentiment: String,
    pub reasoning: String,
    pub risks: Vec<String>,
    pub opportunities: Vec<String>,
    pub confidence_score: f64,
    /// Wall-clock seconds spent handling this request.
    pub processing_time: f64,
    pub data_sources_used: Vec<String>,
}

async fn analyze_proposal(
    State(state): State<AppState>,
    Json(request): Json<ProposalRequest>,
) -> Result<impl IntoResponse, AnalysisError> {
    let start = Instant::now();

    // Missing fields are already rejected by the Json extractor; present but
    // empty fields are rejected here, before the analyzer runs.
    if request.title.trim().is_empty() {
        return Err(AnalysisError::InvalidRequest(
            "title must not be empty".to_string(),
        ));
    }
    if request.description.trim().is_empty() {
        return Err(AnalysisError::InvalidRequest(
            "description must not be empty".to_string(),
        ));
    }

    let result = state
        .analyzer
        .analyze(
            &request.title,
            &request.description,
            request.dao_name.as_deref(),
        )
        .await
        .map_err(|e| AnalysisError::AnalysisFailed(e.to_string()))?;

    let processing_time = start.elapsed().as_secs_f64();

    tracing::info!(
        analyzer = state.analyzer.name(),
        likelihood = result.likelihood_percentage,
        processing_time,
        "Proposal analyzed"
    );

    Ok(Json(AnalysisResponse {
        likelihood_percentage: result.likelihood_percentage,
        likelihood_level: result.likelihood_level.as_str().to_string(),
        community_sentiment: result.community_sentiment.as_str().to_string(),
        reasoning: result.reasoning,
        risks: result.risks,
        opportunities: result.opportunities,
        confidence_score: result.confidence_score,
        processing_time,
        data_sources_used: DATA_SOURCES.iter().map(|s| s.to_string()).collect(),
    }))
}

// ============ Health Check ============

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "dao-analysis",
        "version": env!("CARGO_PKG_VERSION"),
        "analyzer_ready": true
    }))
}

// ============ Root ============

async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "DAO proposal analysis service",
        "docs": "/docs",
        "health": "/health",
        "analyze": "/analyze"
    }))
}
