use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Raw sensor package: a workout code and its positional values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }

    /// Sample packages logged by the tracker out of the box
    pub fn samples() -> Vec<Package> {
        vec![
            Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
            Package::new("RUN", vec![15000.0, 1.0, 75.0]),
            Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ]
    }
}

#[derive(Debug, Deserialize)]
struct PackageFile {
    #[serde(default)]
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonPackages {
    List(Vec<Package>),
    File(PackageFile),
}

/// Load packages from a `.json` or `.toml` file
pub fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read package file {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let packages = if is_json {
        match serde_json::from_str::<JsonPackages>(&contents)
            .context("Failed to parse JSON package file")?
        {
            JsonPackages::List(packages) => packages,
            JsonPackages::File(file) => file.packages,
        }
    } else {
        toml::from_str::<PackageFile>(&contents)
            .context("Failed to parse TOML package file")?
            .packages
    };

    tracing::debug!("Loaded {} packages from {:?}", packages.len(), path);

    Ok(packages)
}
