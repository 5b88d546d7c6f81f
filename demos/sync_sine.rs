//! End-to-end demo: two sensors record the same sine wave, one of them two
//! seconds late, and a third logs temperature on a coarser clock. The
//! pipeline estimates the lag and re-samples everything onto the reference
//! time base.
//!
//! Run with `cargo run --example sync_sine` (RUST_LOG=debug for details).

use tracesync::{compute_shifts, prepare_data, resample, DataMap, DataSet, SyncConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut data = DataMap::new();

    // Reference sensor: t = 0..20 s at 0.5 s spacing.
    let t: Vec<f64> = (0..=40).map(|i| i as f64 * 0.5).collect();
    let y: Vec<f64> = t.iter().map(|&t| t.sin()).collect();
    data.insert(
        "primary".to_string(),
        DataSet::from_vars([("x".to_string(), t), ("y".to_string(), y)]),
    );

    // Second sensor saw the same wave, but its clock runs 2 s behind.
    let t: Vec<f64> = (0..=40).map(|i| 2.0 + i as f64 * 0.5).collect();
    let y: Vec<f64> = t.iter().map(|&t| (t - 2.0).sin()).collect();
    data.insert(
        "secondary".to_string(),
        DataSet::from_vars([("x".to_string(), t), ("y".to_string(), y)]),
    );

    // Coarse temperature log sharing the secondary's clock.
    let t: Vec<f64> = (0..=10).map(|i| 2.0 + i as f64 * 2.0).collect();
    let y: Vec<f64> = t.iter().map(|&t| (t - 2.0).sin()).collect();
    let temp: Vec<f64> = t.iter().map(|&t| 21.0 + 0.1 * t).collect();
    data.insert(
        "climate".to_string(),
        DataSet::from_vars([
            ("x".to_string(), t),
            ("y".to_string(), y),
            ("temperature".to_string(), temp),
        ]),
    );

    let config = SyncConfig::from_json(
        r#"{
            "interpolation_method": "linear",
            "methods": {"climate": {"temperature": "pchip"}}
        }"#,
    )?;

    let labels = config.build_labels();
    let methods = config.build_methods()?;

    let data = prepare_data(&data, None)?;
    let shifts = compute_shifts(&labels, "primary", &data, config.no_sync)?;
    for (name, shift) in &shifts {
        println!("{name}: estimated shift {shift:+.3} s");
    }

    let table = resample(&labels, "primary", &data, &shifts, &methods)?;

    println!("\n{:>8} {:>10} {:>10} {:>12}", "t", "primary", "secondary", "temperature");
    let t_ref = &table["primary"]["x"];
    for i in (0..t_ref.len()).step_by(5) {
        println!(
            "{:>8.2} {:>10.4} {:>10.4} {:>12.2}",
            t_ref[i],
            table["primary"]["y"][i],
            table["secondary"]["y"][i],
            table["climate"]["temperature"][i],
        );
    }

    Ok(())
}
