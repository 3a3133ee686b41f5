use anyhow::{Result, bail};
use camstat::{Language, MetricLayer, export_filename, filter_provinces, read_provinces, write_csv};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::ExportArgs) -> Result<()> {
    let layer: MetricLayer = args.layer.into();
    let lang: Language = args.lang.into();

    let provinces = read_provinces(&args.dataset)?;
    let query = args.search.as_deref().unwrap_or("");
    let visible = filter_provinces(&provinces, query);
    if visible.is_empty() {
        bail!("[export] no provinces match {query:?}");
    }
    if cli.verbose > 0 {
        eprintln!("[export] {} of {} provinces selected", visible.len(), provinces.len());
    }

    let out_dir = args.output.clone().unwrap_or(".".into());
    let out_path = out_dir.join(export_filename(layer, args.year));
    write_csv(&visible, layer, args.year, lang, &out_path, args.force)?;

    println!("[export] wrote {} rows to {}", visible.len(), out_path.display());

    Ok(())
}
