use std::{io::Cursor, path::Path};

use anyhow::Context as _;

use crate::{
    foundation::core::FrameRGBA,
    foundation::error::{FacetteError, FacetteResult},
};

/// Encode a frame as PNG bytes.
pub fn encode_png(frame: &FrameRGBA) -> FacetteResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.rgba8.clone())
        .ok_or_else(|| FacetteError::export("frame buffer does not match its dimensions"))?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

/// Encode a frame and write it to `path`, creating parent directories.
pub fn write_png(frame: &FrameRGBA, path: &Path) -> FacetteResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.rgba8,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}
