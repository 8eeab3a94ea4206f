//! Near-white background removal.
//!
//! Two conventions live here on purpose. The display path clears any pixel
//! whose channels all sit at or above an absolute floor (default 245). The
//! asset pipeline clears pixels within a tolerance below pure white
//! (default 18, so 237 and up). Shipped assets depend on both cut-offs, so
//! neither is folded into the other.

use image::RgbaImage;

/// Per-channel floor for the display-time filter.
pub const DISPLAY_THRESHOLD: u8 = 245;

/// Distance below 255 tolerated by the asset-pipeline filter.
pub const NEAR_WHITE_TOLERANCE: u8 = 18;

/// Clear near-white pixels in place.
///
/// A pixel is cleared (alpha set to 0) when red, green, and blue are all
/// `>= threshold`. Already-transparent pixels are left untouched, whatever
/// their colour channels say.
pub fn make_background_transparent(image: &mut RgbaImage, threshold: u8) {
    for pixel in image.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        if a == 0 {
            continue;
        }
        if r >= threshold && g >= threshold && b >= threshold {
            pixel.0[3] = 0;
        }
    }
}

/// Copy the image with near-white pixels cleared.
///
/// A pixel is cleared when its alpha is nonzero and every colour channel
/// is `>= 255 - tolerance`. The source is never mutated; it may still be
/// shared with other stages.
pub fn remove_white_background(image: &RgbaImage, tolerance: u8) -> RgbaImage {
    let floor = 255 - tolerance;
    let mut output = image.clone();
    for pixel in output.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        if a != 0 && r >= floor && g >= floor && b >= floor {
            pixel.0[3] = 0;
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn image_of(pixels: &[[u8; 4]]) -> RgbaImage {
        let mut img = RgbaImage::new(pixels.len() as u32, 1);
        for (x, p) in pixels.iter().enumerate() {
            img.put_pixel(x as u32, 0, Rgba(*p));
        }
        img
    }

    #[test]
    fn test_display_filter_clears_at_floor() {
        let mut img = image_of(&[
            [255, 255, 255, 255], // pure white
            [245, 245, 245, 255], // exactly at the floor
            [244, 255, 255, 255], // one channel below
            [200, 40, 40, 255],   // brand colour
        ]);
        make_background_transparent(&mut img, DISPLAY_THRESHOLD);
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        assert_eq!(img.get_pixel(1, 0).0[3], 0);
        assert_eq!(img.get_pixel(2, 0).0[3], 255);
        assert_eq!(img.get_pixel(3, 0).0[3], 255);
    }

    #[test]
    fn test_display_filter_skips_transparent_pixels() {
        let mut img = image_of(&[[255, 255, 255, 0], [250, 250, 250, 7]]);
        make_background_transparent(&mut img, DISPLAY_THRESHOLD);
        // Alpha-0 pixels keep their channel data untouched.
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 0]);
        // Low-but-nonzero alpha still qualifies for clearing.
        assert_eq!(img.get_pixel(1, 0).0[3], 0);
    }

    #[test]
    fn test_display_filter_preserves_colour_channels() {
        let mut img = image_of(&[[250, 250, 250, 255]]);
        make_background_transparent(&mut img, DISPLAY_THRESHOLD);
        assert_eq!(img.get_pixel(0, 0).0, [250, 250, 250, 0]);
    }

    #[test]
    fn test_pipeline_filter_uses_tolerance_cutoff() {
        let img = image_of(&[
            [255, 255, 255, 255],
            [237, 237, 237, 255], // 255 - 18, inside the tolerance
            [236, 240, 240, 255], // one channel just outside
            [30, 30, 30, 255],
        ]);
        let cleared = remove_white_background(&img, NEAR_WHITE_TOLERANCE);
        assert_eq!(cleared.get_pixel(0, 0).0[3], 0);
        assert_eq!(cleared.get_pixel(1, 0).0[3], 0);
        assert_eq!(cleared.get_pixel(2, 0).0[3], 255);
        assert_eq!(cleared.get_pixel(3, 0).0[3], 255);
    }

    #[test]
    fn test_pipeline_filter_skips_transparent_pixels() {
        let img = image_of(&[[250, 250, 250, 0], [250, 250, 250, 3]]);
        let cleared = remove_white_background(&img, NEAR_WHITE_TOLERANCE);
        // Already-transparent pixels keep their channel data; faint but
        // nonzero alpha still qualifies for clearing.
        assert_eq!(cleared.get_pixel(0, 0).0, [250, 250, 250, 0]);
        assert_eq!(cleared.get_pixel(1, 0).0, [250, 250, 250, 0]);
    }

    #[test]
    fn test_pipeline_filter_leaves_source_untouched() {
        let img = image_of(&[[255, 255, 255, 255]]);
        let cleared = remove_white_background(&img, NEAR_WHITE_TOLERANCE);
        assert_eq!(img.get_pixel(0, 0).0[3], 255);
        assert_eq!(cleared.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn test_conventions_diverge_between_cutoffs() {
        // 240 sits below the display floor (245) but inside the pipeline
        // tolerance band (>= 237). The same pixel survives one filter and
        // not the other.
        let mut display = image_of(&[[240, 240, 240, 255]]);
        make_background_transparent(&mut display, DISPLAY_THRESHOLD);
        assert_eq!(display.get_pixel(0, 0).0[3], 255);

        let pipeline = remove_white_background(
            &image_of(&[[240, 240, 240, 255]]),
            NEAR_WHITE_TOLERANCE,
        );
        assert_eq!(pipeline.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn test_full_tolerance_clears_everything_opaque() {
        let img = image_of(&[[0, 0, 0, 255], [120, 5, 200, 255]]);
        let cleared = remove_white_background(&img, 255);
        assert_eq!(cleared.get_pixel(0, 0).0[3], 0);
        assert_eq!(cleared.get_pixel(1, 0).0[3], 0);
    }
}
