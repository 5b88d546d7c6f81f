//! Re-samples every data-set's variables onto the shifted reference time
//! base, producing one positionally-aligned output table.

use std::collections::BTreeMap;

use crate::data::{DataMap, ResampledTable, ShiftMap};
use crate::error::{Result, SyncError};
use crate::labels::LabelMap;
use crate::methods::MethodMap;

/// Build the aligned table: the reference data-set passes through unchanged;
/// every data-set with a shift entry has each of its non-x variables
/// re-sampled at `x_ref + shift` with the kernel the method map resolves.
/// Every output sequence is exactly as long as the reference x-axis.
pub fn resample(
    labels: &LabelMap,
    reference_name: &str,
    data: &DataMap,
    shifts: &ShiftMap,
    methods: &MethodMap,
) -> Result<ResampledTable> {
    let reference = data
        .get(reference_name)
        .ok_or_else(|| SyncError::MissingReference(reference_name.to_string()))?;
    let x_label = &labels.resolve(reference_name).x;
    let x_ref = reference.require(reference_name, x_label)?;

    let mut table = ResampledTable::new();

    let mut passthrough = BTreeMap::new();
    for (var, values) in reference.iter() {
        if values.len() != x_ref.len() {
            return Err(SyncError::LengthMismatch {
                set: reference_name.to_string(),
                var: var.to_string(),
                expected: x_ref.len(),
                actual: values.len(),
            });
        }
        passthrough.insert(var.to_string(), values.to_vec());
    }
    table.insert(reference_name.to_string(), passthrough);

    for (name, &shift) in shifts {
        let set = data
            .get(name)
            .ok_or_else(|| SyncError::MissingDataSet(name.clone()))?;
        let x_label = &labels.resolve(name).x;
        let known_x = set.require(name, x_label)?;
        let query: Vec<f64> = x_ref.iter().map(|&x| x + shift).collect();

        let mut out = BTreeMap::new();
        for (var, values) in set.iter() {
            if var == x_label {
                continue;
            }
            if values.len() != known_x.len() {
                return Err(SyncError::LengthMismatch {
                    set: name.clone(),
                    var: var.to_string(),
                    expected: known_x.len(),
                    actual: values.len(),
                });
            }
            let method = methods.resolve(name, var);
            log::debug!("resampling '{name}.{var}' with {}", method.name());
            out.insert(var.to_string(), method.resample(&query, known_x, values)?);
        }
        table.insert(name.clone(), out);
    }

    Ok(table)
}
