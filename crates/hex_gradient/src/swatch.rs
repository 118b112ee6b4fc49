use std::path::Path;

use image::RgbImage;

use crate::color::rgb::Rgb;
use crate::GradientError;

/// Lay `colors` out left to right, one `cell_width` pixel band each.
pub fn render_swatch(
    colors: &[Rgb],
    cell_width: u32,
    height: u32,
) -> Result<RgbImage, GradientError> {
    let width = u32::try_from(colors.len())
        .ok()
        .and_then(|count| count.checked_mul(cell_width))
        .filter(|&width| width > 0 && height > 0)
        .ok_or(GradientError::InvalidSwatchSize { cells: colors.len(), cell_width, height })?;

    Ok(RgbImage::from_fn(width, height, |x, _| {
        image::Rgb(colors[(x / cell_width) as usize].to_array())
    }))
}

/// Render and save a swatch, picking the image format from the extension.
pub fn save_swatch<P: AsRef<Path>>(
    colors: &[Rgb],
    path: P,
    cell_width: u32,
    height: u32,
) -> Result<(), GradientError> {
    let swatch = render_swatch(colors, cell_width, height)?;
    swatch.save(path.as_ref())?;
    log::info!(
        "Wrote {}x{} swatch to {:?}",
        swatch.width(),
        swatch.height(),
        path.as_ref()
    );
    Ok(())
}
