//! Resolves the interpolation kernel for each (data-set, variable) pair.
//!
//! Precedence: exact per-variable entry, then the data-set's own default,
//! then the global default. Resolution is total; validation of method names
//! happens once, at construction.

use std::collections::BTreeMap;

use crate::error::{Result, SyncError};
use crate::interp::InterpMethod;

#[derive(Debug, Clone)]
pub struct MethodMap {
    default: InterpMethod,
    per_set: BTreeMap<String, InterpMethod>,
    per_var: BTreeMap<String, BTreeMap<String, InterpMethod>>,
}

impl MethodMap {
    /// A resolver that answers `default` for everything.
    pub fn new(default: InterpMethod) -> Self {
        Self {
            default,
            per_set: BTreeMap::new(),
            per_var: BTreeMap::new(),
        }
    }

    /// Build a resolver from registry names, validating every name up front.
    pub fn from_names(
        default: &str,
        per_set: &BTreeMap<String, String>,
        per_var: &BTreeMap<String, BTreeMap<String, String>>,
    ) -> Result<Self> {
        let mut map = Self::new(lookup(default)?);
        for (set, name) in per_set {
            map.set_default_for(set.clone(), lookup(name)?);
        }
        for (set, vars) in per_var {
            for (var, name) in vars {
                map.set_for_var(set.clone(), var.clone(), lookup(name)?);
            }
        }
        Ok(map)
    }

    pub fn set_default_for<S: Into<String>>(&mut self, set: S, method: InterpMethod) {
        self.per_set.insert(set.into(), method);
    }

    pub fn set_for_var<S: Into<String>>(&mut self, set: S, var: S, method: InterpMethod) {
        self.per_var
            .entry(set.into())
            .or_default()
            .insert(var.into(), method);
    }

    pub fn resolve(&self, set: &str, var: &str) -> InterpMethod {
        if let Some(method) = self.per_var.get(set).and_then(|vars| vars.get(var)) {
            return *method;
        }
        if let Some(method) = self.per_set.get(set) {
            return *method;
        }
        self.default
    }
}

fn lookup(name: &str) -> Result<InterpMethod> {
    InterpMethod::from_name(name).ok_or_else(|| SyncError::UnknownMethod(name.to_string()))
}
