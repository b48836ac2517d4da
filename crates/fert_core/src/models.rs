use std::fmt;

use crate::types::FeatureVector;
use crate::Result;

/// A loaded, read-only classifier shared across requests.
pub trait Classifier: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Predict the class index for one feature vector.
    fn predict(&self, features: &FeatureVector) -> Result<usize>;
}
