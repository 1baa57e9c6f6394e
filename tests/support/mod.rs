#![allow(dead_code)]

use kernel_filter::{ImageInfo, Pixel};
use std::fs;
use std::ops::Deref;
use std::path::{Path, PathBuf};

pub fn flat(width: usize, height: usize, p: Pixel) -> (ImageInfo, Vec<Pixel>) {
    let info = ImageInfo::new(width, height);
    (info, vec![p; info.len()])
}

/// Horizontal ramp in red, vertical in green, constant blue, varying alpha.
pub fn gradient(width: usize, height: usize) -> (ImageInfo, Vec<Pixel>) {
    let info = ImageInfo::new(width, height);
    let mut pixels = Vec::with_capacity(info.len());
    for y in 0..height {
        for x in 0..width {
            pixels.push(Pixel::rgba(
                (x * 255 / width.max(1)) as u8,
                (y * 255 / height.max(1)) as u8,
                77,
                ((x + y) * 16) as u8,
            ));
        }
    }
    (info, pixels)
}

/// Fresh empty directory under the system temp dir, removed on drop.
pub struct ScratchDir(PathBuf);

impl Deref for ScratchDir {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for ScratchDir {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

pub fn scratch_dir(name: &str) -> ScratchDir {
    let dir = std::env::temp_dir()
        .join("kernel-filter-tests")
        .join(format!("{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir");
    ScratchDir(dir)
}
