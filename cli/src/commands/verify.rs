use std::fs;

use anyhow::{Context, Result};
use camstat::{Atlas, BoundaryManifest, BoundarySet, read_provinces};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::VerifyArgs) -> Result<()> {
    let bytes = fs::read(&args.boundaries)
        .with_context(|| format!("[verify] failed to read {}", args.boundaries.display()))?;
    let boundaries = BoundarySet::from_geojson_bytes(&bytes)?;
    if cli.verbose > 0 {
        eprintln!("[verify] parsed {} boundary features", boundaries.len());
    }

    let manifest = BoundaryManifest::read_from_json(&args.manifest)?;
    manifest.verify(&bytes, boundaries.len())?;
    println!(
        "[verify] {}: version {}, {} features, checksum ok",
        args.boundaries.display(),
        manifest.version,
        manifest.feature_count,
    );

    if let Some(dataset) = &args.dataset {
        let provinces = read_provinces(dataset)?;
        let atlas = Atlas::new(provinces, boundaries);
        let coverage = atlas.coverage();
        println!(
            "[verify] {} of {} features matched a province",
            coverage.matched,
            atlas.boundaries().len(),
        );
        for name in &coverage.unmatched {
            println!("[verify]   unmatched: {name}");
        }
    }

    Ok(())
}
