//! I/O helpers bridging files and [`PixelBuffer`]s.
//!
//! - `load_image`: decode a PNG/JPEG into a float buffer in `[0, 1]`.
//! - `save_image`: encode a float buffer, clamping to `[0, 255]` at encode time.
//! - `write_json_file`: stream a serializable value to disk as pretty JSON.
//!
//! Transforms never clamp; this module is the only place values are squeezed
//! into a display range.
use super::{ImageView, PixelBuffer};
use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Decode an image file into a buffer with `channels` samples per pixel.
///
/// `channels` selects the conversion: 1 = luma, 3 = RGB, 4 = RGBA.
pub fn load_image(path: &Path, channels: usize) -> Result<PixelBuffer, String> {
    let img = image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    let (width, height) = (img.width() as usize, img.height() as usize);
    let raw = match channels {
        1 => img.into_luma8().into_raw(),
        3 => img.into_rgb8().into_raw(),
        4 => img.into_rgba8().into_raw(),
        other => return Err(format!("Unsupported channel count {other} (expected 1, 3 or 4)")),
    };
    let data = raw.into_iter().map(|v| v as f32 / 255.0).collect();
    PixelBuffer::from_vec(width, height, channels, data)
        .map_err(|e| format!("Failed to wrap {}: {e}", path.display()))
}

/// Encode a buffer to disk; the format follows the file extension.
pub fn save_image<I: ImageView>(buffer: &I, path: &Path) -> Result<(), String> {
    let (w, h) = (buffer.width() as u32, buffer.height() as u32);
    let bytes: Vec<u8> = buffer.rows().flatten().map(|&v| to_u8(v)).collect();
    let dynamic = match buffer.channels() {
        1 => GrayImage::from_raw(w, h, bytes).map(DynamicImage::ImageLuma8),
        3 => RgbImage::from_raw(w, h, bytes).map(DynamicImage::ImageRgb8),
        4 => RgbaImage::from_raw(w, h, bytes).map(DynamicImage::ImageRgba8),
        other => {
            return Err(format!(
                "Cannot encode {other}-channel buffer to {}",
                path.display()
            ))
        }
    }
    .ok_or_else(|| "Failed to create image buffer".to_string())?;
    create_parent_dirs(path)?;
    dynamic
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Stream `value` as pretty JSON into `path`, creating missing directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    create_parent_dirs(path)?;
    let file =
        File::create(path).map_err(|e| format!("Cannot create {}: {e}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(|e| format!("Cannot encode JSON into {}: {e}", path.display()))?;
    writeln!(writer)
        .and_then(|_| writer.flush())
        .map_err(|e| format!("Cannot flush {}: {e}", path.display()))
}

#[inline]
fn to_u8(v: f32) -> u8 {
    // NaN maps to 0
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

fn create_parent_dirs(path: &Path) -> Result<(), String> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
            .map_err(|e| format!("Cannot create directory {}: {e}", dir.display())),
        _ => Ok(()),
    }
}
