//! Color key packing and pixel keying rules

pub mod key;

pub use key::{ColorKey, Keying, OPAQUE_ALPHA_THRESHOLD};
