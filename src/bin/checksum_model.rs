//! Checksum utility for Stress Predictor model artifacts.
//!
//! Validates a linear SVM artifact and writes its SHA-256 sidecar
//! (`<artifact>.sha256`, `sha256sum` format), which the app verifies at
//! startup.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin checksum_model -- models/svm_model.json
//! ```

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use stress_predictor::adapters::svm::{checksum_path, sha256_hex, LinearSvmModel};

fn usage() -> String {
    "Usage: checksum_model <artifact.json>".to_string()
}

fn parse_args() -> Result<PathBuf> {
    let mut args = env::args().skip(1);
    let Some(arg) = args.next() else {
        bail!(usage());
    };
    if arg == "-h" || arg == "--help" || args.next().is_some() {
        bail!(usage());
    }
    Ok(PathBuf::from(arg))
}

fn main() -> Result<()> {
    let artifact_path = parse_args()?;

    let bytes =
        fs::read(&artifact_path).with_context(|| format!("Failed to read {artifact_path:?}"))?;

    // Never checksum something the app would refuse to load.
    let model = LinearSvmModel::from_json_bytes(&bytes)
        .with_context(|| format!("{artifact_path:?} is not a valid model artifact"))?;

    let file_name = artifact_path
        .file_name()
        .and_then(|n| n.to_str())
        .context("Artifact path has no file name")?;

    let digest = sha256_hex(&bytes);
    let sidecar = checksum_path(&artifact_path);
    fs::write(&sidecar, format!("{digest}  {file_name}\n"))
        .with_context(|| format!("Failed to write {sidecar:?}"))?;

    println!(
        "Validated artifact: {} classes, {} features",
        model.artifact().classes.len(),
        model.artifact().feature_names.len()
    );
    println!("Wrote checksum: {sidecar:?}");
    println!("SHA256={digest}");

    Ok(())
}
