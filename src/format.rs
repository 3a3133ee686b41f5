//! Value-formatting helpers for tooltips, summaries, and exports.

use crate::types::MetricLayer;

/// Group an integer with thousands separators: 2000000 -> "2,000,000".
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Monetary value rendered in millions: 12_340_000 -> "$12.3M".
pub fn money_millions(value: f64) -> String {
    format!("${:.1}M", value / 1_000_000.0)
}

/// Density label; undefined densities render "N/A" rather than a numeric
/// artifact.
pub fn density_label(density: Option<f64>) -> String {
    match density {
        Some(d) if d.is_finite() => format!("{d:.1}"),
        _ => "N/A".into(),
    }
}

/// Tooltip line for a layer value: `"{label}: {formatted value}"`.
/// The label is expected to be already translated.
pub fn layer_value_label(label: &str, value: f64, layer: MetricLayer) -> String {
    match layer {
        MetricLayer::Population => format!("{label}: {}", thousands(value.round().max(0.0) as u64)),
        MetricLayer::Gdp | MetricLayer::Investment => {
            format!("{label}: {}", money_millions(value))
        }
        MetricLayer::Education | MetricLayer::Healthcare => format!("{label}: {value:.1}%"),
        MetricLayer::Infrastructure => format!("{label}: {value:.1}"),
    }
}

/// CSV cell for a metric value: whole numbers without decimals, synthesized
/// or index values with one.
pub fn metric_cell(value: f64) -> String {
    if !value.is_finite() {
        return "0".into();
    }
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
