//! Feature input collection: bounded manual flags and uploaded test files.

use std::fs;
use std::path::Path;

use anyhow::Context;
use iris_core::FeatureRecord;
use serde::Deserialize;

/// Inclusive value range for one manually entered measurement.
///
/// These bounds are a policy of the manual input flags only. The server
/// accepts any numeric value, and records loaded from a test file are
/// sent verbatim.
#[derive(Debug, Clone, Copy)]
pub struct FeatureBounds {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
}

/// Sepal length range of the measurement widget
pub const SEPAL_LENGTH: FeatureBounds = FeatureBounds {
    name: "sepal length",
    min: 4.3,
    max: 7.9,
};

/// Sepal width range of the measurement widget
pub const SEPAL_WIDTH: FeatureBounds = FeatureBounds {
    name: "sepal width",
    min: 2.0,
    max: 4.4,
};

/// Petal length range of the measurement widget
pub const PETAL_LENGTH: FeatureBounds = FeatureBounds {
    name: "petal length",
    min: 1.0,
    max: 6.9,
};

/// Petal width range of the measurement widget
pub const PETAL_WIDTH: FeatureBounds = FeatureBounds {
    name: "petal width",
    min: 0.1,
    max: 2.5,
};

impl FeatureBounds {
    /// Whether the value lies inside the inclusive range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Parse a flag value, enforcing the range.
    fn parse(&self, raw: &str) -> Result<f64, String> {
        let value: f64 = raw
            .parse()
            .map_err(|_| format!("{} must be a number", self.name))?;
        if !self.contains(value) {
            return Err(format!(
                "{} must be between {} and {} cm",
                self.name, self.min, self.max
            ));
        }
        Ok(value)
    }
}

// clap value parsers for the four measurement flags

pub fn parse_sepal_length(raw: &str) -> Result<f64, String> {
    SEPAL_LENGTH.parse(raw)
}

pub fn parse_sepal_width(raw: &str) -> Result<f64, String> {
    SEPAL_WIDTH.parse(raw)
}

pub fn parse_petal_length(raw: &str) -> Result<f64, String> {
    PETAL_LENGTH.parse(raw)
}

pub fn parse_petal_width(raw: &str) -> Result<f64, String> {
    PETAL_WIDTH.parse(raw)
}

/// Uploaded test file: a JSON document whose `input_test` object carries
/// the four measurements.
#[derive(Debug, Deserialize)]
struct TestInputFile {
    input_test: FeatureRecord,
}

/// Load a prediction record from a test file. The record is used
/// verbatim; manual input bounds do not apply.
pub fn load_test_file(path: &Path) -> anyhow::Result<FeatureRecord> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read test file: {}", path.display()))?;
    let file: TestInputFile = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse test file: {}", path.display()))?;
    Ok(file.input_test)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_test_file(temp_dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = temp_dir.path().join("input_test.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_bounds_accept_in_range_values() {
        assert_eq!(parse_sepal_length("4.3"), Ok(4.3));
        assert_eq!(parse_sepal_length("7.9"), Ok(7.9));
        assert_eq!(parse_sepal_width("3.1"), Ok(3.1));
        assert_eq!(parse_petal_length("1.0"), Ok(1.0));
        assert_eq!(parse_petal_width("2.5"), Ok(2.5));
    }

    #[test]
    fn test_bounds_reject_out_of_range_values() {
        assert!(parse_sepal_length("4.2").is_err());
        assert!(parse_sepal_length("8.0").is_err());
        assert!(parse_sepal_width("0.0").is_err());
        assert!(parse_petal_length("7.0").is_err());
        assert!(parse_petal_width("-0.1").is_err());
    }

    #[test]
    fn test_bounds_reject_non_numeric_values() {
        let err = parse_petal_width("wide").unwrap_err();
        assert!(err.contains("must be a number"));
    }

    #[test]
    fn test_load_test_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_test_file(
            &temp_dir,
            r#"{"input_test": {"sepal_length": 6.2, "sepal_width": 2.9, "petal_length": 4.3, "petal_width": 1.3}}"#,
        );

        let record = load_test_file(&path).unwrap();
        assert_eq!(record, FeatureRecord::new(6.2, 2.9, 4.3, 1.3));
    }

    #[test]
    fn test_load_test_file_skips_bounds() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_test_file(
            &temp_dir,
            r#"{"input_test": {"sepal_length": 99.0, "sepal_width": 0.0, "petal_length": 50.0, "petal_width": -3.0}}"#,
        );

        let record = load_test_file(&path).unwrap();
        assert_eq!(record.sepal_length, 99.0);
        assert_eq!(record.petal_width, -3.0);
    }

    #[test]
    fn test_load_test_file_rejects_missing_measurement() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_test_file(
            &temp_dir,
            r#"{"input_test": {"sepal_length": 6.2, "sepal_width": 2.9, "petal_length": 4.3}}"#,
        );

        assert!(load_test_file(&path).is_err());
    }

    #[test]
    fn test_load_test_file_rejects_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_test_file(
            &temp_dir,
            r#"{"sepal_length": 6.2, "sepal_width": 2.9, "petal_length": 4.3, "petal_width": 1.3}"#,
        );

        assert!(load_test_file(&path).is_err());
    }

    #[test]
    fn test_load_missing_test_file() {
        assert!(load_test_file(Path::new("/nonexistent/input_test.json")).is_err());
    }
}
