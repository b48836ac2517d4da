use std::path::PathBuf;

use fert_core::{fertilizer_label, Classifier, CropType, Error, FeatureVector, SoilType};
use fert_inference::{load_model, Config, RandomForest};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_load_fixture_and_predict() {
    let model = load_model(&Config::new(fixture("forest.json"))).unwrap();
    assert_eq!(model.name(), "RandomForest");

    let features = FeatureVector::encode("Sandy", "Maize", 10.0, 20.0, 30.0).unwrap();
    let class = model.predict(&features).unwrap();
    assert_eq!(class, 17);
    assert_eq!(fertilizer_label(class).unwrap(), "Urea");
}

#[test]
fn test_fixture_tie_breaks_to_lowest_class() {
    let forest = RandomForest::from_path(fixture("forest.json")).unwrap();

    let black = FeatureVector::new(SoilType::Black, CropType::Cotton, 40.0, 0.0, 10.0);
    assert_eq!(forest.predict_proba(&black).unwrap()[5], 0.5);
    assert_eq!(forest.predict(&black).unwrap(), 5);

    let red = FeatureVector::new(SoilType::Red, CropType::Cotton, 40.0, 0.0, 30.0);
    assert_eq!(forest.predict(&red).unwrap(), 0);
}

#[test]
fn test_every_valid_pair_maps_to_a_label() {
    let model = load_model(&Config::new(fixture("forest.json"))).unwrap();
    for soil in SoilType::ALL {
        for crop in CropType::ALL {
            let features = FeatureVector::new(soil, crop, 30.0, 12.0, 7.0);
            let class = model.predict(&features).unwrap();
            assert!(fertilizer_label(class).is_ok());
        }
    }
}

#[test]
fn test_missing_artifact_is_fatal() {
    let result = load_model(&Config::new(fixture("does_not_exist.json")));
    assert!(matches!(result, Err(Error::Model(_))));
}

#[test]
fn test_wrong_feature_width_is_fatal() {
    let result = load_model(&Config::new(fixture("wrong_width.json")));
    assert!(matches!(result, Err(Error::Model(_))));
}
