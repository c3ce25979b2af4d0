use std::sync::Arc;
use std::time::Instant;

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::Json;
use schemars::{schema_for, JsonSchema};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::warn;

use gpuid_core::{Generator, GpuidError, Place, Places, RawPlace};

#[derive(Serialize, JsonSchema)]
pub struct GpuidResults {
    time: String,
    result: Places<Place>,
}

fn status_for(err: &GpuidError) -> StatusCode {
    match err.kind() {
        GpuidError::Decode(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

pub async fn gpuid_handler(
    Extension(generator): Extension<Arc<Generator>>,
    Json(payload): Json<Value>,
) -> Result<Json<GpuidResults>, (StatusCode, Json<Value>)> {
    let start_time = Instant::now();
    let result = Places::<RawPlace>::from_json(payload).and_then(|places| generator.generate(places));
    match result {
        Ok(result) => Ok(Json(GpuidResults {
            time: format!("{:.2?}", start_time.elapsed()),
            result,
        })),
        Err(err) => {
            warn!("rejected payload: {}", err);
            Err((status_for(&err), Json(json!({ "error": err.to_string() }))))
        }
    }
}

pub async fn schema_handler() -> String {
    let schema = schema_for!(Places<RawPlace>);
    serde_json::to_string(&schema).expect("json schema")
}

pub async fn results_schema_handler() -> String {
    let schema = schema_for!(GpuidResults);
    serde_json::to_string(&schema).expect("json schema")
}

pub async fn health_handler() -> &'static str {
    "ok"
}
