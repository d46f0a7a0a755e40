#![forbid(unsafe_code)]

//! Per-file color tallying
//!
//! One scan covers one input file: every frame decodes to RGBA, each pixel
//! is keyed according to the transparency rule, and occurrences accumulate
//! in a single tally. No state is shared between files.

use crate::color::{ColorKey, Keying};
use crate::engine::decode;
use image::RgbaImage;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that end a single file's scan
#[derive(Debug, Error)]
pub enum ScanError {
    /// The file exists but could not be decoded as an image
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Options controlling how pixels are keyed
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Count transparent pixels as distinct colors (full RGBA keys)
    pub include_transparency: bool,
}

/// Result of scanning one input file
#[derive(Debug, Clone)]
pub struct FileScan {
    /// The scanned path, as given on the command line
    pub path: PathBuf,
    /// Occurrence count per distinct color
    pub tally: HashMap<ColorKey, u64>,
    /// Keying rule the tally was built under
    pub keying: Keying,
    /// Number of frames iterated; 1 for a static image
    pub frames: u32,
}

impl FileScan {
    /// Number of distinct colors in the tally
    pub fn distinct_colors(&self) -> usize {
        self.tally.len()
    }

    /// Total pixels that contributed to the tally
    pub fn total_pixels(&self) -> u64 {
        self.tally.values().sum()
    }

    /// Colors sorted by descending occurrence count.
    ///
    /// Ties are broken by ascending key so output is deterministic.
    pub fn sorted_colors(&self) -> Vec<(ColorKey, u64)> {
        let mut colors: Vec<(ColorKey, u64)> =
            self.tally.iter().map(|(key, count)| (*key, *count)).collect();
        colors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        colors
    }
}

/// Scans one image file into a color tally.
///
/// Algorithm:
/// 1. Open the file and guess its format.
/// 2. Iterate every frame (a static image yields exactly one).
/// 3. Convert each frame to RGBA and key each pixel.
/// 4. Increment the tally entry for that key.
///
/// A decode error at any point discards the whole file; there is no
/// partial-tally recovery.
pub fn scan_file(path: &Path, options: ScanOptions) -> Result<FileScan, ScanError> {
    let keying = Keying::for_transparency(options.include_transparency);

    let mut tally = HashMap::new();
    let mut frames = 0u32;

    for frame in decode::open_frames(path).map_err(|e| decode_error(path, e))? {
        let frame = frame.map_err(|e| decode_error(path, e))?;
        tally_frame(&frame, keying, &mut tally);
        frames += 1;
    }

    Ok(FileScan {
        path: path.to_path_buf(),
        tally,
        keying,
        frames,
    })
}

fn decode_error(path: &Path, source: image::ImageError) -> ScanError {
    ScanError::Decode {
        path: path.to_path_buf(),
        source,
    }
}

/// Accumulates one frame's pixels into `tally`
fn tally_frame(frame: &RgbaImage, keying: Keying, tally: &mut HashMap<ColorKey, u64>) {
    for pixel in frame.pixels() {
        let [r, g, b, a] = pixel.0;
        if let Some(key) = keying.key(r, g, b, a) {
            *tally.entry(key).or_default() += 1;
        }
    }
}
