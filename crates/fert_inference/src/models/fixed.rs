use fert_core::{Classifier, FeatureVector, Result};

/// Always predicts the same class. Handy for wiring tests and smoke runs
/// without a trained artifact.
#[derive(Debug, Clone, Copy)]
pub struct FixedModel {
    class: usize,
}

impl FixedModel {
    pub fn new(class: usize) -> Self {
        Self { class }
    }
}

impl Classifier for FixedModel {
    fn name(&self) -> &str {
        "Fixed"
    }

    fn predict(&self, _features: &FeatureVector) -> Result<usize> {
        Ok(self.class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fert_core::{CropType, SoilType};

    #[test]
    fn test_fixed_model() {
        let model = FixedModel::new(7);
        let features = FeatureVector::new(SoilType::Red, CropType::Paddy, 1.0, 2.0, 3.0);
        assert_eq!(model.name(), "Fixed");
        assert_eq!(model.predict(&features).unwrap(), 7);
    }
}
