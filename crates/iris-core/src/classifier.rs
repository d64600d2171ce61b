//! Classifier capability and the centroid model artifact behind it.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::features::{ClassId, FeatureVector};

/// Capability interface for a trained classifier.
///
/// The contract is batch-in/batch-out: implementations classify every
/// vector in the batch and return one class id per row, in input order.
pub trait Classifier: Send + Sync {
    /// Classify a batch of feature vectors.
    fn infer(&self, batch: &[FeatureVector]) -> Result<Vec<ClassId>>;
}

/// One labeled centroid of a trained model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassCentroid {
    /// Class id emitted for vectors closest to this centroid
    pub class_id: ClassId,
    /// Mean feature vector of the class, in feature order
    pub centroid: FeatureVector,
}

/// Nearest-centroid classifier loaded from a serialized artifact.
///
/// The artifact is a JSON document with a `classes` array. How it was
/// trained is outside this crate; the service only consumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CentroidModel {
    classes: Vec<ClassCentroid>,
}

impl CentroidModel {
    /// Creates a model from trained centroids. A model without classes
    /// cannot predict anything and is rejected.
    pub fn new(classes: Vec<ClassCentroid>) -> Result<Self> {
        if classes.is_empty() {
            return Err(Error::Model("model has no classes".to_string()));
        }
        Ok(Self { classes })
    }

    /// Loads a model artifact from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let model: CentroidModel = serde_json::from_str(&content)?;
        if model.classes.is_empty() {
            return Err(Error::Model(format!(
                "model artifact {} contains no classes",
                path.display()
            )));
        }
        Ok(model)
    }

    /// Writes the model artifact to disk as JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Number of classes the model can emit.
    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    fn nearest(&self, features: &FeatureVector) -> Result<ClassId> {
        self.classes
            .iter()
            .map(|class| (squared_distance(&class.centroid, features), class.class_id))
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, class_id)| class_id)
            .ok_or_else(|| Error::Model("model has no classes".to_string()))
    }
}

impl Classifier for CentroidModel {
    fn infer(&self, batch: &[FeatureVector]) -> Result<Vec<ClassId>> {
        batch
            .iter()
            .map(|features| self.nearest(features))
            .collect()
    }
}

/// Squared Euclidean distance between two feature vectors. Ranking by
/// nearest centroid does not need the square root.
fn squared_distance(a: &FeatureVector, b: &FeatureVector) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum()
}
