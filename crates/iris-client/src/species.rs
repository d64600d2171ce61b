//! Iris species labels, keyed by the classifier's class ids.

use std::fmt;

use iris_core::ClassId;

/// Known species labels. The id-to-label mapping is owned by the client;
/// the server only emits ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    Setosa,
    Versicolor,
    Virginica,
}

impl Species {
    /// Map a backend class id to a known species. Ids outside the known
    /// set return `None` and are rendered as an invalid prediction.
    pub fn from_class_id(class_id: ClassId) -> Option<Self> {
        match class_id {
            0 => Some(Species::Setosa),
            1 => Some(Species::Versicolor),
            2 => Some(Species::Virginica),
            _ => None,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Species::Setosa => "setosa",
            Species::Versicolor => "versicolor",
            Species::Virginica => "virginica",
        };
        write!(f, "{}", name)
    }
}
