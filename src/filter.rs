use crate::codec;
use common::{ImageInfo, Kernel, Pixel, WidePixel};
use crate::errors::*;
use std::path::{Path, PathBuf};

/// One input image and the buffers used to filter it.
///
/// The decoded source is read-only for the lifetime of the session. The wide
/// destination and the narrow output are allocated once and reused by every
/// kernel, so border pixels a kernel does not reach keep the values left by
/// the previous one.
pub struct Filter {
    input_path: PathBuf,
    info: ImageInfo,
    source: Vec<Pixel>,
    destination: Vec<WidePixel>,
    output: Vec<Pixel>,
    output_path: Option<PathBuf>,
}

impl Filter {
    /// Decodes `input_path` into a new session.
    pub fn open(input_path: &Path) -> Result<Self> {
        let (info, pixels) = codec::load_rgba(input_path)?;
        info!(
            "loaded {}, {}×{}, {}",
            input_path.display(),
            info.width,
            info.height,
            input_path
                .extension()
                .map(|e| e.to_string_lossy())
                .unwrap_or_default()
        );
        Self::from_pixels(input_path, info, pixels)
    }

    /// Session over an already decoded image. `input_path` only names the
    /// outputs.
    pub fn from_pixels(input_path: &Path, info: ImageInfo, pixels: Vec<Pixel>) -> Result<Self> {
        if pixels.len() != info.len() {
            bail!(ErrorKind::BufferSize(info.len(), pixels.len()));
        }
        Ok(Self {
            input_path: input_path.to_path_buf(),
            info,
            source: pixels,
            destination: vec![WidePixel::default(); info.len()],
            output: vec![Pixel::default(); info.len()],
            output_path: None,
        })
    }

    pub fn info(&self) -> &ImageInfo {
        &self.info
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn source(&self) -> &[Pixel] {
        &self.source
    }

    pub fn destination(&self) -> &[WidePixel] {
        &self.destination
    }

    pub fn destination_mut(&mut self) -> &mut [WidePixel] {
        &mut self.destination
    }

    /// Where the last processed kernel will be written, if any.
    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_ref().map(PathBuf::as_path)
    }

    /// Convolves the source with `kernel` into the destination buffer.
    pub fn process(&mut self, kernel: &Kernel) -> &mut Self {
        info!("applying {}", kernel.label());
        match common::interior(&self.info, kernel.order()) {
            Some((xs, ys)) => debug!("interior x {:?}, y {:?}", xs, ys),
            None => warn!(
                "{}×{} image is smaller than {} kernel, nothing to convolve",
                self.info.width,
                self.info.height,
                kernel.label()
            ),
        }

        common::convolve_image(&self.info, &self.source, &mut self.destination, kernel);
        self.output_path = Some(codec::output_path(&self.input_path, kernel.label()));
        self
    }

    /// Clamps the destination into the output buffer and returns it.
    pub fn squash(&mut self) -> &[Pixel] {
        common::squash(&self.destination, &mut self.output);
        &self.output
    }

    /// Clamps and encodes the last processed kernel's result. Returns the
    /// path written.
    pub fn write(&mut self) -> Result<PathBuf> {
        let path = match self.output_path {
            Some(ref path) => path.clone(),
            None => bail!(ErrorKind::NothingProcessed),
        };
        self.squash();
        codec::save_rgba(&path, &self.info, &self.output)?;
        debug!("wrote {}", path.display());
        Ok(path)
    }
}
