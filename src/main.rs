//! Headless smoke tool: decode a BMP, rescale it, report the result.

use anyhow::{bail, Context, Result};
use painterkit::{init_logging, load_bmp, scale, ScaleMode, BUILD_DATE, VERSION};
use tracing::info;

fn main() -> Result<()> {
    init_logging()?;
    info!("PainterKit {} ({})", VERSION, BUILD_DATE);

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: painterkit <image.bmp> [scale-factor] [nearest|bilinear]");
        return Ok(());
    };
    let factor: f64 = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("scale factor must be numeric, got {raw:?}"))?,
        None => 1.0,
    };
    let mode = match args.next().as_deref() {
        None | Some("nearest") => ScaleMode::Nearest,
        Some("bilinear") => ScaleMode::Bilinear,
        Some(other) => bail!("unknown resample mode: {other}"),
    };

    let image = load_bmp(&path).with_context(|| format!("Failed to decode {path}"))?;
    info!(width = image.width(), height = image.height(), "decoded image");

    let scaled = scale(&image, factor, mode);
    info!(
        width = scaled.width(),
        height = scaled.height(),
        factor,
        ?mode,
        "rescaled image"
    );

    Ok(())
}
