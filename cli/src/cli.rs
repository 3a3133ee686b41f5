use std::path::PathBuf;

use camstat::{Language, MetricLayer, Visualization};

/// Province statistics CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "camstat", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Render the province choropleth to an SVG file
    Render(RenderArgs),

    /// Export the visible province set as CSV
    Export(ExportArgs),

    /// Check boundary data against its manifest
    Verify(VerifyArgs),

    /// Print overall statistics for a province dataset
    Summary(SummaryArgs),
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Province dataset (.csv or .json)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub dataset: PathBuf,

    /// Boundary GeoJSON file
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub boundaries: PathBuf,

    /// Output SVG file, defaults to "./map.svg"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Metric layer to color by
    #[arg(short, long, value_enum, default_value = "population")]
    pub layer: LayerArg,

    /// Visualization mode
    #[arg(long, value_enum, default_value = "standard")]
    pub visualization: VisualizationArg,

    /// Display language for labels and tooltips
    #[arg(long, value_enum, default_value = "en")]
    pub lang: LangArg,

    /// Reference year shown in tooltips and filenames
    #[arg(long, default_value_t = 2024)]
    pub year: i32,

    /// Output width in pixels
    #[arg(long, default_value_t = 1200)]
    pub width: i32,

    /// Skip province name labels
    #[arg(long)]
    pub no_labels: bool,

    /// Province id to draw with selection emphasis
    #[arg(long)]
    pub select: Option<String>,

    /// Manifest to verify the boundary file against before rendering
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub manifest: Option<PathBuf>,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Province dataset (.csv or .json)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub dataset: PathBuf,

    /// Output directory, defaults to "."
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Metric layer to export
    #[arg(short, long, value_enum, default_value = "population")]
    pub layer: LayerArg,

    /// Display language for province names
    #[arg(long, value_enum, default_value = "en")]
    pub lang: LangArg,

    /// Year stamped on every row and in the filename
    #[arg(long, default_value_t = 2024)]
    pub year: i32,

    /// Only export provinces matching this query
    #[arg(long)]
    pub search: Option<String>,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args, Debug)]
pub struct VerifyArgs {
    /// Boundary GeoJSON file
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub boundaries: PathBuf,

    /// Manifest JSON describing the expected boundary data
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub manifest: PathBuf,

    /// Also report boundary features with no matching province
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub dataset: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct SummaryArgs {
    /// Province dataset (.csv or .json)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub dataset: PathBuf,

    /// Display language
    #[arg(long, value_enum, default_value = "en")]
    pub lang: LangArg,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum LayerArg {
    Gdp,
    Population,
    Education,
    Healthcare,
    Investment,
    Infrastructure,
}

impl From<LayerArg> for MetricLayer {
    fn from(arg: LayerArg) -> Self {
        match arg {
            LayerArg::Gdp => MetricLayer::Gdp,
            LayerArg::Population => MetricLayer::Population,
            LayerArg::Education => MetricLayer::Education,
            LayerArg::Healthcare => MetricLayer::Healthcare,
            LayerArg::Investment => MetricLayer::Investment,
            LayerArg::Infrastructure => MetricLayer::Infrastructure,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum VisualizationArg {
    Standard,
    Heatmap,
    Cluster,
}

impl From<VisualizationArg> for Visualization {
    fn from(arg: VisualizationArg) -> Self {
        match arg {
            VisualizationArg::Standard => Visualization::Standard,
            VisualizationArg::Heatmap => Visualization::Heatmap,
            VisualizationArg::Cluster => Visualization::Cluster,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum LangArg {
    Km,
    En,
    Zh,
}

impl From<LangArg> for Language {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::Km => Language::Km,
            LangArg::En => Language::En,
            LangArg::Zh => Language::Zh,
        }
    }
}
