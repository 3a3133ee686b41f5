use std::fs;

use anyhow::{Context, Result, bail};
use camstat::{Atlas, BoundaryManifest, BoundarySet, Language, Translations, ViewState, read_provinces};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::RenderArgs) -> Result<()> {
    let out_path = args.output.clone().unwrap_or("./map.svg".into());

    let provinces = read_provinces(&args.dataset)?;
    if cli.verbose > 0 {
        eprintln!("[render] loaded {} provinces from {}", provinces.len(), args.dataset.display());
    }

    let bytes = fs::read(&args.boundaries)
        .with_context(|| format!("[render] failed to read {}", args.boundaries.display()))?;
    let boundaries = BoundarySet::from_geojson_bytes(&bytes)?;

    if let Some(manifest_path) = &args.manifest {
        let manifest = BoundaryManifest::read_from_json(manifest_path)?;
        manifest.verify(&bytes, boundaries.len())?;
        if cli.verbose > 0 {
            eprintln!("[render] boundary asset ok against manifest version {}", manifest.version);
        }
    }

    if !args.force && out_path.exists() {
        bail!("Refusing to overwrite existing file: {} (use --force)", out_path.display());
    }

    let atlas = Atlas::new(provinces, boundaries);

    if cli.verbose > 0 {
        let coverage = atlas.coverage();
        if !coverage.unmatched.is_empty() {
            eprintln!(
                "[render] {} boundary features have no matching province: {}",
                coverage.unmatched.len(),
                coverage.unmatched.join(", "),
            );
        }
    }

    let mut view = ViewState::default();
    view.set_layer(args.layer.into());
    view.set_visualization(args.visualization.into());
    view.set_year(args.year);
    view.show_labels = !args.no_labels;
    view.select(args.select.clone());

    let lang: Language = args.lang.into();
    let i18n = Translations::new();
    atlas.to_svg_with_size(&out_path, &view, lang, &i18n, args.width, 10)?;

    println!("[render] wrote {}", out_path.display());

    Ok(())
}
