//! Prints the georeferencing status of rasters from their `gdalinfo -json` output.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example check_georef -- chartgeo/examples/data/7149_pal300.json
//! ```
//!
//! A configuration file can be given with `--config <path>`.

use anyhow::{bail, Context, Result};
use chartgeo::{GdalInfo, GeorefConfig, GeorefValidator};
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    let mut config = GeorefConfig::default();
    let mut paths = vec![];
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let Some(path) = args.next() else {
                bail!("--config requires a path");
            };
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {path}"))?;
            config = GeorefConfig::from_json_str(&json)?;
        } else {
            paths.push(PathBuf::from(arg));
        }
    }

    if paths.is_empty() {
        bail!("usage: check_georef [--config <config.json>] <gdalinfo.json>...");
    }

    let validator = GeorefValidator::new(config);
    for path in paths {
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let info = GdalInfo::from_json_str(&json)?;
        let status = validator.classify(&info)?;

        match info.gbox() {
            Ok(gbox) if info.is_georeferenced() => {
                println!("{}: {status} {gbox}", path.display())
            }
            _ => println!("{}: {status}", path.display()),
        }
    }

    Ok(())
}
