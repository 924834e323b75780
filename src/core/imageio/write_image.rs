use crate::core::base::*;
use crate::core::error::*;

use image::codecs::hdr::HdrEncoder;
use image::{Rgb, RgbImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

impl From<image::ImageError> for FiberError {
    fn from(value: image::ImageError) -> Self {
        let msg = value.to_string();
        return FiberError::error(&msg);
    }
}

fn to_byte(v: Float) -> u8 {
    Float::clamp(255.0 * gamma_correct(v), 0.0, 255.0) as u8
}

/// Writes interleaved RGB floats as a Radiance HDR image.
pub fn write_image_hdr(
    name: &str,
    rgb: &[Float],
    width: usize,
    height: usize,
) -> Result<(), FiberError> {
    assert!(rgb.len() == width * height * 3);
    let mut pixels: Vec<Rgb<f32>> = Vec::with_capacity(width * height);
    for i in 0..(width * height) {
        pixels.push(Rgb([
            rgb[3 * i + 0] as f32,
            rgb[3 * i + 1] as f32,
            rgb[3 * i + 2] as f32,
        ]));
    }
    let file = File::create(name)?;
    let writer = BufWriter::new(file);
    HdrEncoder::new(writer).encode(&pixels, width, height)?;
    return Ok(());
}

/// Writes interleaved RGB floats tonemapped to an 8-bit image; the format is
/// chosen from the file extension by the image crate.
pub fn write_image_bytes(
    name: &str,
    rgb: &[Float],
    width: usize,
    height: usize,
) -> Result<(), FiberError> {
    assert!(rgb.len() == width * height * 3);
    let mut byte_img: Vec<u8> = vec![0; width * height * 3];
    for i in 0..rgb.len() {
        byte_img[i] = to_byte(rgb[i]);
    }
    let img = RgbImage::from_vec(width as u32, height as u32, byte_img).unwrap();
    match img.save(name) {
        Ok(()) => {
            return Ok(());
        }
        Err(e) => {
            return Err(FiberError::from(e));
        }
    }
}

pub fn write_image(
    name: &str,
    rgb: &[Float],
    width: usize,
    height: usize,
) -> Result<(), FiberError> {
    if let Some(ext) = Path::new(name).extension() {
        if let Some(s) = ext.to_str() {
            match s {
                "hdr" => {
                    return write_image_hdr(name, rgb, width, height);
                }
                _ => return write_image_bytes(name, rgb, width, height),
            }
        }
    }
    return Err(FiberError::error("write_image: unrecognized output path"));
}
