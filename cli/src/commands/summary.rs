use anyhow::Result;
use camstat::{Atlas, BoundarySet, Language, Translations, format, read_provinces};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::SummaryArgs) -> Result<()> {
    let lang: Language = args.lang.into();
    let i18n = Translations::new();

    let provinces = read_provinces(&args.dataset)?;
    if cli.verbose > 0 {
        eprintln!("[summary] loaded {} provinces from {}", provinces.len(), args.dataset.display());
    }

    let atlas = Atlas::new(provinces, BoundarySet::default());
    let summary = atlas.summary();

    println!("{}", i18n.get("overallStatistics", lang));
    println!("  {}: {}", i18n.get("totalProvinces", lang), summary.provinces);
    println!(
        "  {}: {}",
        i18n.get("totalPopulation", lang),
        format::thousands(summary.population),
    );
    println!(
        "  {}: {} km²",
        i18n.get("totalArea", lang),
        format::thousands(summary.area_km2.round().max(0.0) as u64),
    );
    println!(
        "  {}: {}",
        i18n.get("avgDensity", lang),
        format::density_label(summary.avg_density),
    );

    Ok(())
}
