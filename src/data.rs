//! Named data-sets: the immutable inputs and outputs of the pipeline.

use std::collections::BTreeMap;

use crate::error::{Result, SyncError};

/// A named collection of equal-length numeric variables sharing one x-axis.
///
/// Variables are kept in a `BTreeMap` so iteration order (and therefore
/// output ordering) is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSet {
    vars: BTreeMap<String, Vec<f64>>,
}

impl DataSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a data-set from `(name, values)` pairs.
    pub fn from_vars<I, S>(vars: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        Self {
            vars: vars.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn insert<S: Into<String>>(&mut self, name: S, values: Vec<f64>) {
        self.vars.insert(name.into(), values);
    }

    pub fn var(&self, name: &str) -> Option<&[f64]> {
        self.vars.get(name).map(Vec::as_slice)
    }

    pub fn var_names(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Look up a variable, reporting the owning set name on failure.
    pub(crate) fn require(&self, set: &str, name: &str) -> Result<&[f64]> {
        self.var(name).ok_or_else(|| SyncError::MissingVariable {
            set: set.to_string(),
            var: name.to_string(),
        })
    }
}

/// Data-sets keyed by set name.
pub type DataMap = BTreeMap<String, DataSet>;

/// Estimated shift per non-reference data-set; the reference has no entry.
pub type ShiftMap = BTreeMap<String, f64>;

/// Re-sampled output: set name → variable name → values, every sequence as
/// long as the reference x-axis.
pub type ResampledTable = BTreeMap<String, BTreeMap<String, Vec<f64>>>;

/// Optional select-and-rename mapping applied before synchronisation:
/// `{"<set-name>": {"<new-name>": "<old-name>", ...}, ...}`.
pub type SetsMapping = BTreeMap<String, BTreeMap<String, String>>;

/// Prepare raw data-sets for the model: apply the optional select/rename
/// mapping, then drop every variable without a single finite sample.
///
/// With a mapping present the output contains only the mapped sets and
/// variables; an unknown set or source variable is an error. Sets left with
/// no surviving variables are omitted entirely.
pub fn prepare_data(data: &DataMap, mapping: Option<&SetsMapping>) -> Result<DataMap> {
    let mut out = DataMap::new();
    match mapping {
        None => {
            for (name, set) in data {
                let kept = filter_finite(name, set.iter());
                if !kept.is_empty() {
                    out.insert(name.clone(), kept);
                }
            }
        }
        Some(mapping) => {
            for (name, renames) in mapping {
                let set = data
                    .get(name)
                    .ok_or_else(|| SyncError::MissingDataSet(name.clone()))?;
                let mut selected = Vec::with_capacity(renames.len());
                for (new_name, old_name) in renames {
                    let values = set.require(name, old_name)?;
                    selected.push((new_name.as_str(), values));
                }
                let kept = filter_finite(name, selected.into_iter());
                if !kept.is_empty() {
                    out.insert(name.clone(), kept);
                }
            }
        }
    }
    Ok(out)
}

fn filter_finite<'a>(set_name: &str, vars: impl Iterator<Item = (&'a str, &'a [f64])>) -> DataSet {
    let mut out = DataSet::new();
    for (name, values) in vars {
        if values.iter().any(|v| v.is_finite()) {
            out.insert(name, values.to_vec());
        } else {
            log::debug!("dropping '{set_name}.{name}': no finite samples");
        }
    }
    out
}
