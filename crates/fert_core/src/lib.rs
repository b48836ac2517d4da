pub mod error;
pub mod models;
pub mod types;

pub use error::{Error, Result};
pub use models::Classifier;
pub use types::{
    fertilizer_label, CropType, FeatureVector, SoilType, FEATURE_COUNT, FERTILIZER_LABELS,
};
