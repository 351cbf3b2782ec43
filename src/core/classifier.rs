use crate::core::features::FEATURE_DIM;
use crate::models::Priority;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a classifier artifact
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to read model file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse model file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid model: {0}")]
    Invalid(String),
}

/// Min-max feature scaler fitted offline alongside the classifier
///
/// `transform` applies `(x - min) * scale` per dimension, matching the
/// parameters stored in the artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct MinMaxScaler {
    pub mins: [f64; FEATURE_DIM],
    pub scales: [f64; FEATURE_DIM],
}

impl MinMaxScaler {
    pub fn transform(&self, features: &[f64; FEATURE_DIM]) -> [f64; FEATURE_DIM] {
        let mut scaled = [0.0; FEATURE_DIM];
        for i in 0..FEATURE_DIM {
            scaled[i] = (features[i] - self.mins[i]) * self.scales[i];
        }
        scaled
    }
}

/// Pre-trained nearest-centroid priority classifier
///
/// The artifact holds one centroid per label in the scaled feature space;
/// prediction picks the label whose centroid is closest. Training happens
/// offline, this service only loads the result.
#[derive(Debug, Clone, Deserialize)]
pub struct PriorityModel {
    pub scaler: MinMaxScaler,
    pub centroids: Vec<Centroid>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Centroid {
    pub label: Priority,
    pub point: [f64; FEATURE_DIM],
}

impl PriorityModel {
    /// Load and validate a pre-trained artifact from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let raw = std::fs::read_to_string(path)?;
        let model: PriorityModel = serde_json::from_str(&raw)?;
        if model.centroids.is_empty() {
            return Err(ModelError::Invalid("artifact has no centroids".into()));
        }
        Ok(model)
    }

    /// Predict a priority label for a raw (unscaled) feature vector
    pub fn predict(&self, features: &[f64; FEATURE_DIM]) -> Priority {
        let scaled = self.scaler.transform(features);

        self.centroids
            .iter()
            .map(|centroid| (squared_distance(&scaled, &centroid.point), centroid.label))
            .min_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(_, label)| label)
            .unwrap_or(Priority::Medium)
    }
}

#[inline]
fn squared_distance(a: &[f64; FEATURE_DIM], b: &[f64; FEATURE_DIM]) -> f64 {
    let mut total = 0.0;
    for i in 0..FEATURE_DIM {
        let delta = a[i] - b[i];
        total += delta * delta;
    }
    total
}
