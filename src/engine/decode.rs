#![forbid(unsafe_code)]

//! Frame extraction for static and animated images
//!
//! Animated GIF, APNG and animated WebP files expand to their full frame
//! sequence; every other recognized format decodes to a single frame. All
//! frames come back as RGBA buffers.

use image::codecs::gif::GifDecoder;
use image::codecs::png::PngDecoder;
use image::codecs::webp::WebPDecoder;
use image::{
    AnimationDecoder, DynamicImage, Frames, ImageFormat, ImageReader, ImageResult, RgbaImage,
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Iterator over the RGBA frames of one image file
pub enum FrameIter {
    /// A static image: exactly one frame
    Single(Option<RgbaImage>),
    /// An animated image: frames decoded on demand
    Animated(Frames<'static>),
}

impl Iterator for FrameIter {
    type Item = ImageResult<RgbaImage>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            FrameIter::Single(frame) => frame.take().map(Ok),
            FrameIter::Animated(frames) => {
                frames.next().map(|frame| frame.map(|f| f.into_buffer()))
            }
        }
    }
}

/// Opens `path` and returns its frame sequence.
///
/// The format is guessed from the file content, falling back to the file
/// extension, so a mislabeled file still decodes.
pub fn open_frames(path: &Path) -> ImageResult<FrameIter> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;

    match reader.format() {
        Some(ImageFormat::Gif) => {
            let decoder = GifDecoder::new(buffered(path)?)?;
            Ok(FrameIter::Animated(decoder.into_frames()))
        }
        Some(ImageFormat::Png) => {
            let decoder = PngDecoder::new(buffered(path)?)?;
            if decoder.is_apng()? {
                Ok(FrameIter::Animated(decoder.apng()?.into_frames()))
            } else {
                let image = DynamicImage::from_decoder(decoder)?;
                Ok(FrameIter::Single(Some(image.into_rgba8())))
            }
        }
        Some(ImageFormat::WebP) => {
            let decoder = WebPDecoder::new(buffered(path)?)?;
            if decoder.has_animation() {
                Ok(FrameIter::Animated(decoder.into_frames()))
            } else {
                let image = DynamicImage::from_decoder(decoder)?;
                Ok(FrameIter::Single(Some(image.into_rgba8())))
            }
        }
        _ => Ok(FrameIter::Single(Some(reader.decode()?.into_rgba8()))),
    }
}

fn buffered(path: &Path) -> std::io::Result<BufReader<File>> {
    Ok(BufReader::new(File::open(path)?))
}
