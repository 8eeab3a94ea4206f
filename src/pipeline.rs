//! Offline logo asset pipeline.
//!
//! One-shot: decode, strip the near-white background, nudge contrast,
//! pad to a square, then emit transparent PNGs at the three sizes the
//! web console serves.

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::error::{EmblemError, Result};
use crate::filter;
use crate::loader;

/// Edge length of the primary output.
pub const PRIMARY_SIZE: u32 = 1024;

/// Edge length of the medium output.
pub const MEDIUM_SIZE: u32 = 512;

/// Edge length of the small output.
pub const SMALL_SIZE: u32 = 256;

/// Padding added around the squared artwork, as a fraction of its side.
pub const PADDING_RATIO: f32 = 0.15;

/// Contrast boost applied after background removal.
pub const CONTRAST_BOOST: f32 = 5.0;

/// Where the processed assets land, relative to a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedAssets {
    pub primary: PathBuf,
    pub medium: PathBuf,
    pub small: PathBuf,
}

impl ProcessedAssets {
    /// All output paths, largest first.
    pub fn all(&self) -> [&Path; 3] {
        [&self.primary, &self.medium, &self.small]
    }
}

/// The fixed output layout under a project root.
pub fn output_paths(root: &Path) -> ProcessedAssets {
    ProcessedAssets {
        primary: root.join("src").join("assets").join("logo.png"),
        medium: root.join("public").join("logo-512.png"),
        small: root.join("public").join("logo-256.png"),
    }
}

/// Centre an image on a transparent square canvas with breathing room.
///
/// The canvas side is the longer input side plus padding on both ends;
/// offsets round to the nearest pixel, so odd leftovers lean
/// bottom-right.
pub fn pad_to_square(image: &RgbaImage, padding_ratio: f32) -> RgbaImage {
    let (width, height) = image.dimensions();
    let side = width.max(height);
    let padding = (side as f32 * padding_ratio).round() as u32;
    let canvas_size = side + padding * 2;

    let mut canvas = RgbaImage::new(canvas_size, canvas_size);
    let x = ((canvas_size - width) as f32 / 2.0).round() as i64;
    let y = ((canvas_size - height) as f32 / 2.0).round() as i64;
    imageops::overlay(&mut canvas, image, x, y);
    canvas
}

/// Scale an image to fit inside `target_w` x `target_h` without cropping
/// or distortion, centred on a transparent canvas.
pub fn contain(image: &RgbaImage, target_w: u32, target_h: u32, filter: FilterType) -> RgbaImage {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return RgbaImage::new(target_w, target_h);
    }

    let scale = (target_w as f64 / width as f64).min(target_h as f64 / height as f64);
    let scaled_w = ((width as f64 * scale).round() as u32).max(1);
    let scaled_h = ((height as f64 * scale).round() as u32).max(1);
    let resized = imageops::resize(image, scaled_w, scaled_h, filter);

    let mut canvas = RgbaImage::new(target_w, target_h);
    let x = ((target_w - scaled_w) as f32 / 2.0).round() as i64;
    let y = ((target_h - scaled_h) as f32 / 2.0).round() as i64;
    imageops::overlay(&mut canvas, &resized, x, y);
    canvas
}

/// Run the full pipeline on `input`, writing assets under `root`.
///
/// Output directories are created as needed. Any failure aborts the run;
/// partially written outputs from an earlier iteration are left behind.
pub fn process_logo(input: &Path, root: &Path) -> Result<ProcessedAssets> {
    if !input.exists() {
        return Err(EmblemError::Io {
            path: input.to_path_buf(),
            message: "File not found".to_string(),
        });
    }

    let source = loader::load_rgba(input)?;
    let stripped = filter::remove_white_background(&source, filter::NEAR_WHITE_TOLERANCE);
    let adjusted = imageops::contrast(&stripped, CONTRAST_BOOST);
    let squared = pad_to_square(&adjusted, PADDING_RATIO);

    let outputs = output_paths(root);
    for (path, size) in [
        (&outputs.primary, PRIMARY_SIZE),
        (&outputs.medium, MEDIUM_SIZE),
        (&outputs.small, SMALL_SIZE),
    ] {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| EmblemError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
        let fitted = contain(&squared, size, size, FilterType::CatmullRom);
        fitted.save(path).map_err(|e| EmblemError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })?;
    }

    Ok(outputs)
}
