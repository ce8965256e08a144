// Axum API Server Module
//
// Purpose: JSON endpoints for crop suitability evaluation, reference tables
// and the rainfall screen. Plays the role of the form-submission boundary.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

use moka::future::Cache;
use rayon::prelude::*;
use serde_json::Value;

use crate::config::ServerConfig;
use crate::error::{FormError, GENERIC_PREDICTION_ERROR};
use crate::form::{check_rainfall_range, FormSubmission};
use crate::screening::screen_rainfall;
use crate::suitability::{
    assess, crop_profile, render_markdown, Crop, EvaluationRequest, RainfallCategory,
    RainfallInput, SoilType, SuitabilityAssessment, SuitabilityLevel,
};

/// Largest batch accepted by `POST /api/suitability/batch`
pub const MAX_BATCH_SIZE: usize = 1_000;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    /// Memoized suitability responses keyed by validated request
    pub cache: Cache<String, Value>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        tracing::info!("Validating crop reference tables...");
        crop_profile::validate_all()?;
        tracing::info!("{} crop profiles loaded", Crop::all().len());

        tracing::info!("Initializing Moka cache...");
        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(config.cache_ttl)
            .build();

        Ok(Self { cache })
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Reference data
        .route("/api/crops", get(list_crops))
        .route("/api/crops/:crop", get(get_crop))
        .route("/api/soils", get(list_soils))
        .route("/api/rainfall-categories", get(list_rainfall_categories))

        // Suitability endpoints
        .route("/api/suitability/batch", post(evaluate_batch))
        .route("/api/suitability", post(evaluate))

        // Crop-agnostic rainfall screen
        .route("/api/screening/rainfall", post(screen))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn list_crops() -> Json<Value> {
    let profiles: Vec<_> = Crop::all().iter().map(Crop::profile).collect();
    Json(serde_json::json!({
        "count": profiles.len(),
        "crops": profiles,
    }))
}

async fn get_crop(Path(name): Path<String>) -> Result<Json<Value>, AppError> {
    let crop = Crop::parse(&name)
        .ok_or_else(|| AppError::NotFound(format!("Crop {} not found", name)))?;
    Ok(Json(serde_json::to_value(crop.profile())?))
}

async fn list_soils() -> Json<Value> {
    Json(serde_json::json!({ "soils": SoilType::selectable() }))
}

async fn list_rainfall_categories() -> Json<Value> {
    Json(serde_json::json!({ "categories": RainfallCategory::table() }))
}

async fn evaluate(
    State(state): State<AppState>,
    payload: Result<Json<FormSubmission>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(form) = payload?;
    let request = form.validate().map_err(|e| {
        tracing::warn!("Rejected submission: {}", e);
        AppError::InvalidInput(e)
    })?;

    let cache_key = cache_key(&request);
    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for {}", cache_key);
        return Ok(Json(cached));
    }

    let assessment = assess(&request);
    tracing::info!(
        crop = %assessment.crop,
        score = assessment.overall.total_score,
        "Evaluated suitability: {}",
        assessment.overall.message
    );

    let result = assessment_json(&assessment)?;
    state.cache.insert(cache_key, result.clone()).await;

    Ok(Json(result))
}

async fn evaluate_batch(
    payload: Result<Json<BatchSuitabilityRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(req) = payload?;
    let start = std::time::Instant::now();
    let count = req.submissions.len();
    tracing::info!("Batch suitability check for {} submissions", count);

    if count > MAX_BATCH_SIZE {
        let e = FormError::TooManySubmissions { count, max: MAX_BATCH_SIZE };
        tracing::warn!("Rejected batch: {}", e);
        return Err(AppError::InvalidInput(e));
    }

    // Use spawn_blocking to run Rayon on a blocking thread pool
    let outcomes: Vec<std::result::Result<SuitabilityAssessment, FormError>> =
        tokio::task::spawn_blocking(move || {
            req.submissions
                .par_iter()
                .map(|form| form.validate().map(|request| assess(&request)))
                .collect::<Vec<_>>()
        })
        .await
        .map_err(|e| AppError::Internal(format!("Rayon task failed: {}", e)))?;

    let mut results = Vec::with_capacity(outcomes.len());
    let mut suited_count = 0usize;
    let mut score_sum = 0u32;
    let mut evaluated = 0u32;

    for outcome in &outcomes {
        match outcome {
            Ok(assessment) => {
                evaluated += 1;
                score_sum += u32::from(assessment.overall.total_score);
                if assessment.overall.level == SuitabilityLevel::High {
                    suited_count += 1;
                }
                let assessment = assessment_json(assessment)?;
                results.push(serde_json::json!({
                    "ok": true,
                    "assessment": assessment,
                }));
            }
            Err(e) => {
                tracing::warn!("Rejected batch submission: {}", e);
                results.push(serde_json::json!({
                    "ok": false,
                    "error": e.user_message(),
                }));
            }
        }
    }

    let average_score = if evaluated > 0 {
        f64::from(score_sum) / f64::from(evaluated)
    } else {
        0.0
    };

    tracing::info!("Batch complete in {:?}", start.elapsed());

    Ok(Json(serde_json::json!({
        "results": results,
        "aggregate": {
            "average_score": average_score,
            "suited_count": suited_count,
            "rejected_count": outcomes.len() - evaluated as usize,
            "total_count": outcomes.len(),
        }
    })))
}

async fn screen(
    payload: Result<Json<ScreeningRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(req) = payload?;
    let rainfall_mm = check_rainfall_range(req.rainfall_mm).map_err(|e| {
        tracing::warn!("Rejected rainfall screen: {}", e);
        AppError::InvalidInput(e)
    })?;

    let outcome = screen_rainfall(rainfall_mm);
    Ok(Json(serde_json::json!({
        "suitable": outcome.suitable,
        "headline": outcome.headline(),
        "reason": outcome.reason,
        "message": outcome.message,
        "rainfall_mm": outcome.rainfall_mm,
    })))
}

// ============================================================================
// Helpers
// ============================================================================

fn cache_key(request: &EvaluationRequest) -> String {
    let rainfall = match request.rainfall {
        RainfallInput::Category(category) => format!("{:?}", category),
        RainfallInput::Exact(mm) => format!("{}mm", mm),
    };
    format!(
        "suitability:{:?}:{:?}:{}:{}",
        request.crop,
        request.soil,
        request.month.number(),
        rainfall
    )
}

fn assessment_json(assessment: &SuitabilityAssessment) -> Result<Value, AppError> {
    let mut value = serde_json::to_value(assessment)?;
    if let Value::Object(ref mut map) = value {
        map.insert("markdown".to_string(), Value::String(render_markdown(assessment)));
    }
    Ok(value)
}

// ============================================================================
// Request Types
// ============================================================================

#[derive(serde::Deserialize, Debug)]
struct BatchSuitabilityRequest {
    submissions: Vec<FormSubmission>,
}

#[derive(serde::Deserialize, Debug)]
struct ScreeningRequest {
    rainfall_mm: f64,
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    InvalidInput(FormError),
    /// Body was not valid JSON or did not match the request shape
    MalformedBody(String),
    NotFound(String),
    Internal(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedBody(rejection.body_text())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            // Cause stays in the logs; users see one generic message
            AppError::InvalidInput(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, GENERIC_PREDICTION_ERROR.to_string())
            }
            AppError::MalformedBody(cause) => {
                tracing::warn!("Rejected request body: {}", cause);
                (StatusCode::UNPROCESSABLE_ENTITY, GENERIC_PREDICTION_ERROR.to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suitability::{Month, RainfallCategory};

    #[test]
    fn test_cache_key_distinguishes_rainfall_forms() {
        let base = EvaluationRequest {
            crop: Crop::Rice,
            soil: SoilType::Clay,
            rainfall: RainfallInput::Category(RainfallCategory::Moderate),
            month: Month::July,
        };
        let exact = EvaluationRequest { rainfall: RainfallInput::Exact(75.0), ..base };

        assert_eq!(cache_key(&base), "suitability:Rice:Clay:7:Moderate");
        assert_eq!(cache_key(&exact), "suitability:Rice:Clay:7:75mm");
    }

    #[test]
    fn test_assessment_json_includes_markdown() {
        let request = EvaluationRequest {
            crop: Crop::Wheat,
            soil: SoilType::Loam,
            rainfall: RainfallInput::Exact(80.0),
            month: Month::October,
        };
        let value = assessment_json(&assess(&request)).unwrap();
        assert_eq!(value["overall"]["level"], "high");
        assert!(value["markdown"].as_str().unwrap().starts_with("## Growing Wheat in October"));
    }
}
