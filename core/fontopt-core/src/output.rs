//! Streaming output helpers (made by FontLab https://www.fontlab.com/)

use std::io::Write;

use anyhow::Result;

use crate::config::FontOptionsConfig;
use crate::options::FontOptions;

fn checked_config(options: &FontOptions) -> Result<FontOptionsConfig> {
    let config = options.to_config();
    config.check_finite()?;
    Ok(config)
}

fn configs(options: &[FontOptions]) -> Result<Vec<FontOptionsConfig>> {
    options.iter().map(checked_config).collect()
}

/// Write options as prettified JSON array.
///
/// Fails before writing anything if a number is NaN or infinite.
pub fn write_json_pretty(options: &[FontOptions], mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(&configs(options)?)?;
    w.write_all(json.as_bytes())?;
    w.write_all(b"\n")?;
    Ok(())
}

/// Write options as newline-delimited JSON (NDJSON).
///
/// Fails before writing anything if a number is NaN or infinite.
pub fn write_ndjson(options: &[FontOptions], mut w: impl Write) -> Result<()> {
    for config in configs(options)? {
        let line = serde_json::to_string(&config)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}

/// One `key: value` pair per line, in field order.
pub fn plain_rows(options: &FontOptions) -> Vec<(&'static str, String)> {
    let optional = |v: Option<f32>| v.map_or_else(|| "-".to_string(), |v| v.to_string());
    let variations = options
        .variations()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");

    vec![
        ("name", options.name().to_string()),
        ("style", options.style().to_string()),
        (
            "typeface",
            options
                .typeface()
                .map_or_else(|| "-".to_string(), |face| format!("{} {}", face.name(), face.style())),
        ),
        ("fallbacks", options.fallbacks().join(",")),
        ("fallback_enabled", options.fallback_enabled().to_string()),
        ("height", optional(options.height())),
        ("point_height", optional(options.point_height())),
        ("kerning_factor", options.kerning_factor().to_string()),
        ("horizontal_scale", options.horizontal_scale().to_string()),
        ("underline", options.underline().to_string()),
        ("metrics_kind", format!("{:?}", options.metrics_kind()).to_lowercase()),
        ("ascent_override", optional(options.ascent_override())),
        ("descent_override", optional(options.descent_override())),
        ("variations", variations),
    ]
}

/// Write [`plain_rows`] as `key: value` lines.
pub fn write_plain(options: &FontOptions, mut w: impl Write) -> Result<()> {
    for (key, value) in plain_rows(options) {
        writeln!(w, "{key}: {value}")?;
    }
    Ok(())
}
