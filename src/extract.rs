//! Dominant colour extraction from logo imagery.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::colour::Rgb;
use crate::loader;

/// Side length of the downsampled grid the average is taken over.
pub const SAMPLE_SIZE: u32 = 64;

/// Pixels with alpha below this never contribute.
pub const MIN_ALPHA: u8 = 10;

/// Pixels with every channel strictly above this never contribute.
pub const NEAR_WHITE_FLOOR: u8 = 245;

/// Average colour of the visible, non-background pixels.
///
/// The image is downsampled to a 64x64 grid first so cost is flat in the
/// input size. Transparent and near-white pixels are skipped; if nothing
/// is left (blank or background-only art), there is no dominant colour.
pub fn dominant_colour(image: &RgbaImage) -> Option<Rgb> {
    if image.width() == 0 || image.height() == 0 {
        return None;
    }
    let sample = imageops::resize(image, SAMPLE_SIZE, SAMPLE_SIZE, FilterType::Nearest);

    let mut r_sum: u64 = 0;
    let mut g_sum: u64 = 0;
    let mut b_sum: u64 = 0;
    let mut count: u64 = 0;
    for pixel in sample.pixels() {
        let [r, g, b, a] = pixel.0;
        if a < MIN_ALPHA {
            continue;
        }
        if r > NEAR_WHITE_FLOOR && g > NEAR_WHITE_FLOOR && b > NEAR_WHITE_FLOOR {
            continue;
        }
        r_sum += r as u64;
        g_sum += g as u64;
        b_sum += b as u64;
        count += 1;
    }

    if count == 0 {
        return None;
    }
    Some(Rgb {
        r: ((r_sum + count / 2) / count) as u8,
        g: ((g_sum + count / 2) / count) as u8,
        b: ((b_sum + count / 2) / count) as u8,
    })
}

/// Decode an image file and extract its dominant colour.
///
/// Unreadable or undecodable files yield `None` rather than an error; a
/// corrupt logo should never block startup.
pub fn dominant_colour_from_path(path: &Path) -> Option<Rgb> {
    let image = loader::load_rgba(path).ok()?;
    dominant_colour(&image)
}
