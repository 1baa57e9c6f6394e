//! Boundary to the `image` crate: decoding into RGBA pixels, encoding them
//! back out, and naming output files.

use common::{ImageInfo, Pixel};
use crate::errors::*;
use image::{ColorType, ImageFormat};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Decodes `path` and normalises it to RGBA8, whatever its native layout.
pub fn load_rgba(path: &Path) -> Result<(ImageInfo, Vec<Pixel>)> {
    codec_for(path)?;
    let image = image::open(path)
        .chain_err(|| format!("Could not open image {}", path.display()))?
        .to_rgba8();

    let info = ImageInfo::new(image.width() as usize, image.height() as usize);
    let pixels = image
        .into_raw()
        .chunks_exact(4)
        .map(|c| Pixel::rgba(c[0], c[1], c[2], c[3]))
        .collect();
    Ok((info, pixels))
}

/// Encodes `pixels` as RGBA8 with the codec matching the extension of `path`.
pub fn save_rgba(path: &Path, info: &ImageInfo, pixels: &[Pixel]) -> Result<()> {
    if pixels.len() != info.len() {
        bail!(ErrorKind::BufferSize(info.len(), pixels.len()));
    }
    let format = codec_for(path)?;

    let mut raw = Vec::with_capacity(pixels.len() * 4);
    for p in pixels {
        raw.extend_from_slice(&[p.r, p.g, p.b, p.a]);
    }
    image::save_buffer_with_format(
        path,
        &raw,
        info.width as u32,
        info.height as u32,
        ColorType::Rgba8,
        format,
    )
    .chain_err(|| format!("Error saving output image {}", path.display()))?;
    Ok(())
}

/// Picks the codec from the file extension.
pub fn codec_for(path: &Path) -> Result<ImageFormat> {
    let ext = path
        .extension()
        .ok_or_else(|| ErrorKind::MissingExtension(path.to_path_buf()))?;
    ImageFormat::from_extension(ext)
        .ok_or_else(|| ErrorKind::UnsupportedFormat(ext.to_string_lossy().into_owned()).into())
}

/// `<dir>/<stem>_<label>.<ext>` for an input of `<dir>/<stem>.<ext>`.
pub fn output_path(input: &Path, label: &str) -> PathBuf {
    let mut name = input.file_stem().map(OsString::from).unwrap_or_default();
    name.push("_");
    name.push(label);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}
