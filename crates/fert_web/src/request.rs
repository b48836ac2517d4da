use axum::http::{header::CONTENT_TYPE, HeaderMap};
use fert_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// How a `/predict` body is encoded, and so how the answer is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    Json,
    Form,
}

impl BodyFormat {
    /// Anything that isn't `application/json` is treated as a form post.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let is_json = headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .map(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
            .unwrap_or(false);
        if is_json {
            BodyFormat::Json
        } else {
            BodyFormat::Form
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonInput {
    #[serde(default)]
    pub soil_type: String,
    #[serde(default)]
    pub crop_type: String,
    pub n: Option<serde_json::Number>,
    pub p: Option<serde_json::Number>,
    pub k: Option<serde_json::Number>,
}

impl JsonInput {
    pub fn readings(&self) -> Result<(f64, f64, f64)> {
        Ok((
            json_reading("n", self.n.as_ref())?,
            json_reading("p", self.p.as_ref())?,
            json_reading("k", self.k.as_ref())?,
        ))
    }
}

fn json_reading(field: &str, value: Option<&serde_json::Number>) -> Result<f64> {
    value
        .and_then(|number| number.as_f64())
        .filter(|value| value.is_finite())
        .ok_or_else(|| Error::MalformedInput(format!("`{}` must be a number", field)))
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormInput {
    #[serde(default)]
    pub soil_type: String,
    #[serde(default)]
    pub crop_type: String,
    pub n: Option<String>,
    pub p: Option<String>,
    pub k: Option<String>,
}

impl FormInput {
    pub fn readings(&self) -> Result<(f64, f64, f64)> {
        Ok((
            form_reading("n", self.n.as_deref())?,
            form_reading("p", self.p.as_deref())?,
            form_reading("k", self.k.as_deref())?,
        ))
    }
}

fn form_reading(field: &str, value: Option<&str>) -> Result<f64> {
    value
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .ok_or_else(|| Error::MalformedInput(format!("`{}` must be a number", field)))
}

/// JSON success body. `N` is whatever numeric form the caller sent.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse<N> {
    pub recommended_fertilizer: &'static str,
    pub soil_type: String,
    pub crop_type: String,
    pub n: N,
    pub p: N,
    pub k: N,
}
