use std::path::PathBuf;
use std::sync::Arc;

use fert_core::{Classifier, Result};

pub mod models;

pub use models::fixed::FixedModel;
pub use models::forest::{Node, RandomForest, Tree};

/// Where the pretrained artifact lives on disk.
pub const DEFAULT_MODEL_PATH: &str = "fertilizer_model.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub model_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

impl Config {
    pub fn new(model_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
        }
    }
}

/// Load the classifier once at startup. Any error here means the
/// process cannot serve predictions.
pub fn load_model(config: &Config) -> Result<Arc<dyn Classifier>> {
    let forest = RandomForest::from_path(&config.model_path)?;
    Ok(Arc::new(forest))
}
