//! Serde-facing configuration mirroring the original JSON side inputs:
//! default labels, per-set label overrides, the default interpolation method
//! and per-set/per-variable method overrides, and the no-sync switch.
//! Loading files is the caller's job; this module only interprets values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SyncError};
use crate::labels::{LabelMap, LabelPair};
use crate::methods::MethodMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Default `var-name` of the common x-axis.
    pub x_label: String,
    /// Default `var-name` of the common y-axis used for alignment.
    pub y_label: String,
    /// Default interpolation method applied where nothing more specific is
    /// configured; must name a registered kernel.
    pub interpolation_method: String,
    /// Per-set label overrides: `{"<set-name>": {"x": ..., "y": ...}}`.
    pub labels: BTreeMap<String, LabelPair>,
    /// Per-variable method overrides:
    /// `{"<set-name>": {"<var-name>": "<method>"}}`.
    pub methods: BTreeMap<String, BTreeMap<String, String>>,
    /// Per-set default methods: `{"<set-name>": "<method>"}`.
    pub set_methods: BTreeMap<String, String>,
    /// Skip shift estimation and assign 0 to every data-set.
    pub no_sync: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            interpolation_method: "linear".to_string(),
            labels: BTreeMap::new(),
            methods: BTreeMap::new(),
            set_methods: BTreeMap::new(),
            no_sync: false,
        }
    }
}

impl SyncConfig {
    /// Parse a configuration from a JSON document.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| SyncError::InvalidConfig(e.to_string()))
    }

    /// The label resolver this configuration describes.
    pub fn build_labels(&self) -> LabelMap {
        let mut map = LabelMap::new(self.x_label.clone(), self.y_label.clone());
        for (set, pair) in &self.labels {
            map.set_override(set.clone(), pair.x.clone(), pair.y.clone());
        }
        map
    }

    /// The method resolver this configuration describes. Fails with
    /// `UnknownMethod` if any configured name is not a registered kernel.
    pub fn build_methods(&self) -> Result<MethodMap> {
        MethodMap::from_names(&self.interpolation_method, &self.set_methods, &self.methods)
    }
}
