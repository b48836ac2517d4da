use std::sync::Arc;

use axum::{
    extract::{FromRequest, Request, State},
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use fert_core::{fertilizer_label, Classifier, Error, FeatureVector};

use crate::error::ApiError;
use crate::pages::{self, ResultView};
use crate::request::{BodyFormat, FormInput, JsonInput, PredictionResponse};
use crate::AppState;

pub async fn home() -> Result<Html<String>, ApiError> {
    Ok(Html(pages::home_page()?))
}

pub async fn predict(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Response, ApiError> {
    match BodyFormat::from_headers(request.headers()) {
        BodyFormat::Json => {
            let Json(input) = Json::<JsonInput>::from_request(request, &state)
                .await
                .map_err(|rejection| Error::MalformedInput(rejection.body_text()))?;
            let (n, p, k) = input.readings()?;
            let soil_type = input.soil_type.to_lowercase();
            let crop_type = input.crop_type.to_lowercase();
            let fertilizer = recommend(&state, &soil_type, &crop_type, n, p, k)?;

            Ok(Json(PredictionResponse {
                recommended_fertilizer: fertilizer,
                soil_type,
                crop_type,
                n: input.n,
                p: input.p,
                k: input.k,
            })
            .into_response())
        }
        BodyFormat::Form => {
            let Form(input) = Form::<FormInput>::from_request(request, &state)
                .await
                .map_err(|rejection| Error::MalformedInput(rejection.body_text()))?;
            let (n, p, k) = input.readings()?;
            let soil_type = input.soil_type.to_lowercase();
            let crop_type = input.crop_type.to_lowercase();
            let fertilizer = recommend(&state, &soil_type, &crop_type, n, p, k)?;

            Ok(Html(pages::result_page(&ResultView {
                fertilizer,
                soil_type: &soil_type,
                crop_type: &crop_type,
                n,
                p,
                k,
            })?)
            .into_response())
        }
    }
}

fn recommend(
    state: &AppState,
    soil_type: &str,
    crop_type: &str,
    n: f64,
    p: f64,
    k: f64,
) -> Result<&'static str, Error> {
    let features = FeatureVector::encode(soil_type, crop_type, n, p, k)?;
    let class = state.model.predict(&features)?;
    let fertilizer = fertilizer_label(class)?;
    tracing::debug!(
        "🌱 {} predicted {} ({}) for {:?}",
        state.model.name(),
        fertilizer,
        class,
        features.to_array()
    );
    Ok(fertilizer)
}
