//! Loading batches of sensor packages.
//!
//! Packages come either from the built-in demo batch or from a file:
//! - `.json`: an array of `{"code": "RUN", "data": [15000, 1, 75]}` objects
//! - `.csv`: one package per line, `RUN,15000,1,75`, no header

use crate::{Error, Package, Result};
use csv::{ReaderBuilder, Trim};
use once_cell::sync::Lazy;
use std::path::Path;

static DEMO_PACKAGES: Lazy<Vec<Package>> = Lazy::new(|| {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
});

/// Built-in demo batch, one package per supported workout kind
pub fn demo_packages() -> &'static [Package] {
    &DEMO_PACKAGES
}

/// Load a package batch from a JSON or CSV file, chosen by extension
pub fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let packages = match extension.as_deref() {
        Some("json") => load_json(path)?,
        Some("csv") => load_csv(path)?,
        _ => {
            return Err(Error::Config(format!(
                "Unsupported package file {:?}: expected a .json or .csv file",
                path
            )))
        }
    };

    tracing::info!("Loaded {} packages from {:?}", packages.len(), path);
    Ok(packages)
}

fn load_json(path: &Path) -> Result<Vec<Package>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn load_csv(path: &Path) -> Result<Vec<Package>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_path(path)?;

    let mut packages = Vec::new();
    for record in reader.records() {
        let record = record?;
        let code = record.get(0).unwrap_or_default().to_string();

        let data = record
            .iter()
            .skip(1)
            .map(|field| {
                field.parse::<f64>().map_err(|e| Error::InvalidParameters {
                    code: code.clone(),
                    reason: format!("value {:?} is not a number: {}", field, e),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        packages.push(Package { code, data });
    }

    Ok(packages)
}
