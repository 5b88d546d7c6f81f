//! Resolves which variable names serve as each data-set's x and y axes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The variable names forming a data-set's alignment signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelPair {
    pub x: String,
    pub y: String,
}

impl Default for LabelPair {
    fn default() -> Self {
        Self {
            x: "x".to_string(),
            y: "y".to_string(),
        }
    }
}

/// Total resolver from set name to its `LabelPair`: an explicit override if
/// one was registered, else the process-wide default pair. Lookups never
/// fail and never allocate.
#[derive(Debug, Clone, Default)]
pub struct LabelMap {
    default: LabelPair,
    overrides: BTreeMap<String, LabelPair>,
}

impl LabelMap {
    /// A resolver whose default pair is (`x_label`, `y_label`).
    pub fn new<S: Into<String>>(x_label: S, y_label: S) -> Self {
        Self {
            default: LabelPair {
                x: x_label.into(),
                y: y_label.into(),
            },
            overrides: BTreeMap::new(),
        }
    }

    pub fn set_override<S: Into<String>>(&mut self, set: S, x_label: S, y_label: S) {
        self.overrides.insert(
            set.into(),
            LabelPair {
                x: x_label.into(),
                y: y_label.into(),
            },
        );
    }

    pub fn resolve(&self, set: &str) -> &LabelPair {
        self.overrides.get(set).unwrap_or(&self.default)
    }
}
