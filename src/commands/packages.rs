use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::paths::packages_dir;

#[derive(Debug, Serialize)]
pub struct PackagesResult {
    pub packages_dir_exists: bool,
    pub packages: Vec<String>,
}

pub fn cmd_packages(root: &Path) -> Result<PackagesResult> {
    let pkgs_dir = packages_dir(root);

    // A missing packages directory is a normal outcome, not an error.
    if !pkgs_dir.exists() {
        return Ok(PackagesResult {
            packages_dir_exists: false,
            packages: Vec::new(),
        });
    }

    let entries = std::fs::read_dir(&pkgs_dir)
        .with_context(|| format!("failed to read {}", pkgs_dir.display()))?;

    let mut packages = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        packages.push(entry.file_name().to_string_lossy().to_string());
    }
    packages.sort();

    Ok(PackagesResult {
        packages_dir_exists: true,
        packages,
    })
}

pub fn format_packages_human(result: &PackagesResult) -> String {
    if !result.packages_dir_exists {
        return "No packages directory found.".to_string();
    }

    result
        .packages
        .iter()
        .map(|name| format!("- {}", name))
        .collect::<Vec<_>>()
        .join("\n")
}
