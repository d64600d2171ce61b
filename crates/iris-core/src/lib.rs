//! Core types for the iris prediction service.
//!
//! This crate carries the pieces shared by the server and client crates:
//! the feature record wire type, the classifier capability trait, and the
//! centroid model artifact loaded at server startup.

pub mod classifier;
pub mod error;
pub mod features;

pub use classifier::{CentroidModel, ClassCentroid, Classifier};
pub use error::{Error, Result};
pub use features::{ClassId, FeatureRecord, FeatureVector};
