#![forbid(unsafe_code)]

//! Colorcount: distinct pixel color counting for raster images
//!
//! Colorcount decodes one or more image files (including multi-frame GIF,
//! APNG and animated WebP files), tallies every pixel into a per-file color
//! histogram, and reports either a terse summary or a frequency-sorted
//! color listing.

pub mod cli;
pub mod color;
pub mod engine;
pub mod output;
