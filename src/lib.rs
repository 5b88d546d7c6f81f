//! TraceSync crate root: re-exports and module wiring.
//!
//! TraceSync aligns named time-indexed data-sets to a common reference and
//! re-samples all of them onto the reference's time base:
//! - `shift`: per-set time-shift estimation via FFT cross-correlation
//! - `interp`: the registry of 1-D interpolation/resampling kernels
//! - `resample`: assembly of the aligned output table
//! - `labels` / `methods`: total default-cascade resolvers for axis labels
//!   and per-variable kernel choice
//! - `data`: the immutable data-set model and input preparation
//! - `config`: serde-facing configuration mirroring the JSON side inputs
//!
//! Sign convention: a positive shift means the data-set lags the reference,
//! and its variables are queried at `x_ref + shift`.

pub mod config;
pub mod data;
pub mod error;
pub mod interp;
pub mod labels;
pub mod methods;
pub mod resample;
pub mod shift;

// Public re-exports for a compact external API
pub use config::SyncConfig;
pub use data::{prepare_data, DataMap, DataSet, ResampledTable, SetsMapping, ShiftMap};
pub use error::{Result, SyncError};
pub use interp::InterpMethod;
pub use labels::{LabelMap, LabelPair};
pub use methods::MethodMap;
pub use resample::resample;
pub use shift::compute_shifts;
