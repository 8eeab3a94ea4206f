//! Image decoding and display-logo preparation.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use image::RgbaImage;

use crate::error::{EmblemError, Result};
use crate::filter;

/// Decode an image file into RGBA.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path).map_err(|e| EmblemError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(image.to_rgba8())
}

/// Decode an in-memory image (an upload body, say) into RGBA.
pub fn decode_rgba(bytes: &[u8]) -> Result<RgbaImage> {
    let image = image::load_from_memory(bytes).map_err(|e| EmblemError::Decode {
        path: "<memory>".into(),
        message: e.to_string(),
    })?;
    Ok(image.to_rgba8())
}

/// Cooperative cancellation handle for logo preparation.
///
/// Cloning shares the flag, so the caller keeps one handle and gives the
/// worker another. Once cancelled a token stays cancelled.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag the work as stale.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Decode a logo and clear its near-white background for display.
///
/// Returns `None` when the file cannot be decoded (the caller falls back
/// to showing the raw source) or when `cancel` fires. The token is checked
/// between stages, not inside pixel loops, so cancellation is prompt but
/// never tears a half-filtered image.
pub fn prepare_display_logo(path: &Path, threshold: u8, cancel: &CancelToken) -> Option<RgbaImage> {
    if cancel.is_cancelled() {
        return None;
    }
    let mut image = load_rgba(path).ok()?;

    if cancel.is_cancelled() {
        return None;
    }
    filter::make_background_transparent(&mut image, threshold);

    if cancel.is_cancelled() {
        return None;
    }
    Some(image)
}
