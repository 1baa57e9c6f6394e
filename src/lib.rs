#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

pub mod codec;
pub mod errors;
pub mod filter;
mod profiler;

pub use common::kernel::{self, CATALOG};
pub use common::{ImageInfo, Kernel, Pixel, WidePixel};
pub use filter::Filter;

use errors::*;
use profiler::Profiler;
use std::path::{Path, PathBuf};

/// Applies every kernel in [`CATALOG`] to `input_path`, writing one file per
/// kernel next to the input.
pub fn run_filters(input_path: &Path) -> Result<Vec<PathBuf>> {
    run_kernels(input_path, &CATALOG)
}

/// Applies `kernels` in order to `input_path`. The first failure aborts the
/// run; outputs already written are left in place.
pub fn run_kernels(input_path: &Path, kernels: &[Kernel]) -> Result<Vec<PathBuf>> {
    let mut profiler = Profiler::new();

    profiler.step("Reading input image");
    let mut filter = Filter::open(input_path)?;

    let mut written = Vec::with_capacity(kernels.len());
    for kernel in kernels {
        profiler.step(kernel.label());
        let path = filter
            .process(kernel)
            .write()
            .chain_err(|| format!("Error applying {}", kernel.label()))?;
        written.push(path);
    }

    Ok(written)
}
