//! Image decoding and per-file color tallying

pub mod decode;
pub mod tally;

pub use decode::FrameIter;
pub use tally::{FileScan, ScanError, ScanOptions, scan_file};
