//! Feature input types shared by the service and the client.

use serde::{Deserialize, Serialize};

/// Positional feature vector handed to the classifier:
/// `[sepal_length, sepal_width, petal_length, petal_width]`, all in cm.
pub type FeatureVector = [f64; 4];

/// Integer class identifier emitted by the classifier.
pub type ClassId = i64;

/// One iris measurement record, the wire format of a prediction request.
///
/// All four fields are required and numeric. The service enforces nothing
/// beyond that; value ranges are an input concern of the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// Sepal length in cm
    pub sepal_length: f64,
    /// Sepal width in cm
    pub sepal_width: f64,
    /// Petal length in cm
    pub petal_length: f64,
    /// Petal width in cm
    pub petal_width: f64,
}

impl FeatureRecord {
    /// Creates a record from the four measurements, in vector order.
    pub fn new(sepal_length: f64, sepal_width: f64, petal_length: f64, petal_width: f64) -> Self {
        Self {
            sepal_length,
            sepal_width,
            petal_length,
            petal_width,
        }
    }

    /// Builds the positional feature vector. The classifier is not
    /// name-aware, so this order must never change.
    pub fn to_vector(&self) -> FeatureVector {
        [
            self.sepal_length,
            self.sepal_width,
            self.petal_length,
            self.petal_width,
        ]
    }
}
