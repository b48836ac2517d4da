use std::fmt;

use crate::{Error, Result};

/// Number of inputs the classifier is trained on: soil, crop, N, P, K.
pub const FEATURE_COUNT: usize = 5;

/// Fertilizer names in the class order the model was trained with.
pub const FERTILIZER_LABELS: [&str; 22] = [
    "10-26-26",
    "14-35-14",
    "17-17-17",
    "20-20",
    "28-28",
    "DAP",
    "DAP-MOP",
    "DAP-SSP",
    "DAP-Urea",
    "MOP",
    "MOP-SSP",
    "MOP-Urea",
    "SSP",
    "SSP-DAP",
    "SSP-DAP-Urea",
    "SSP-MOP",
    "SSP-Urea",
    "Urea",
    "Urea-DAP",
    "Urea-DAP-MOP",
    "Urea-SSP",
    "Urea-SSP-MOP",
];

/// Maps a predicted class index to its fertilizer name.
pub fn fertilizer_label(index: usize) -> Result<&'static str> {
    FERTILIZER_LABELS
        .get(index)
        .copied()
        .ok_or(Error::UnknownClass(index))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoilType {
    Black,
    Clayey,
    Loamy,
    Red,
    Sandy,
}

impl SoilType {
    pub const ALL: [SoilType; 5] = [
        SoilType::Black,
        SoilType::Clayey,
        SoilType::Loamy,
        SoilType::Red,
        SoilType::Sandy,
    ];

    /// Case-insensitive lookup of a soil name.
    pub fn lookup(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::ALL.into_iter().find(|soil| soil.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Black => "black",
            SoilType::Clayey => "clayey",
            SoilType::Loamy => "loamy",
            SoilType::Red => "red",
            SoilType::Sandy => "sandy",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CropType {
    Barley,
    Cotton,
    Cucumber,
    Maize,
    Millets,
    OilSeeds,
    Paddy,
    Sugarcane,
    Tobacco,
    Wheat,
    Rice,
    Tomatoes,
}

impl CropType {
    pub const ALL: [CropType; 12] = [
        CropType::Barley,
        CropType::Cotton,
        CropType::Cucumber,
        CropType::Maize,
        CropType::Millets,
        CropType::OilSeeds,
        CropType::Paddy,
        CropType::Sugarcane,
        CropType::Tobacco,
        CropType::Wheat,
        CropType::Rice,
        CropType::Tomatoes,
    ];

    /// Case-insensitive lookup of a crop name.
    pub fn lookup(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::ALL.into_iter().find(|crop| crop.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CropType::Barley => "barley",
            CropType::Cotton => "cotton",
            CropType::Cucumber => "cucumber",
            CropType::Maize => "maize",
            CropType::Millets => "millets",
            CropType::OilSeeds => "oil seeds",
            CropType::Paddy => "paddy",
            CropType::Sugarcane => "sugarcane",
            CropType::Tobacco => "tobacco",
            CropType::Wheat => "wheat",
            CropType::Rice => "rice",
            CropType::Tomatoes => "tomatoes",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for CropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Model input for a single request, in training column order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub soil: SoilType,
    pub crop: CropType,
    pub n: f64,
    pub p: f64,
    pub k: f64,
}

impl FeatureVector {
    pub fn new(soil: SoilType, crop: CropType, n: f64, p: f64, k: f64) -> Self {
        Self { soil, crop, n, p, k }
    }

    /// Encodes raw soil and crop names, failing if either is unknown.
    pub fn encode(soil: &str, crop: &str, n: f64, p: f64, k: f64) -> Result<Self> {
        match (SoilType::lookup(soil), CropType::lookup(crop)) {
            (Some(soil), Some(crop)) => Ok(Self::new(soil, crop, n, p, k)),
            _ => Err(Error::InvalidCategory),
        }
    }

    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.soil.index() as f64,
            self.crop.index() as f64,
            self.n,
            self.p,
            self.k,
        ]
    }
}
