//! Theme command implementation.
//!
//! Derives the full variable set from an accent and prints it as CSS
//! custom properties (or JSON with `--json`).

use std::path::Path;

use clap::Args;

use crate::colour::Rgb;
use crate::error::{EmblemError, Result};
use crate::extract::dominant_colour_from_path;
use crate::output::Printer;
use crate::theme::ThemeVariables;

/// Derive theme variables from an accent colour or image
#[derive(Args, Debug)]
pub struct ThemeArgs {
    /// Accent colour (#RGB or #RRGGBB) or a path to an image to sample
    #[arg(required = true)]
    pub accent: String,

    /// Emit JSON instead of CSS custom properties
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ThemeArgs, printer: &Printer) -> Result<()> {
    let accent = resolve_accent(&args.accent)?;
    let hsl = accent.to_hsl();

    let note = printer.dim(&format!("hsl({})", hsl));
    printer.status("Derived", &format!("theme from {} {}", accent, note));

    let vars = ThemeVariables::from_hsl(hsl);
    if args.json {
        let json = serde_json::to_string_pretty(&vars).map_err(|e| EmblemError::Pipeline {
            message: format!("Failed to serialize variables: {}", e),
            help: None,
        })?;
        println!("{}", json);
    } else {
        println!("{}", vars.css_block());
    }

    Ok(())
}

/// A hex string wins; anything else is tried as an image path.
fn resolve_accent(accent: &str) -> Result<Rgb> {
    if let Ok(rgb) = Rgb::from_hex(accent) {
        return Ok(rgb);
    }

    let path = Path::new(accent);
    if path.exists() {
        return dominant_colour_from_path(path).ok_or_else(|| EmblemError::Pipeline {
            message: format!("No dominant colour in {}", accent),
            help: Some("The image decodes to transparent or near-white pixels only".to_string()),
        });
    }

    Err(EmblemError::Colour {
        message: format!("Invalid accent: {}", accent),
        help: Some("Pass a hex colour like #0f766e or a path to an image".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_hex_accent() {
        assert_eq!(resolve_accent("#b91c1c").unwrap(), Rgb::new(0xb9, 0x1c, 0x1c));
        assert_eq!(resolve_accent("0f766e").unwrap(), Rgb::new(0x0f, 0x76, 0x6e));
    }

    #[test]
    fn test_resolve_image_accent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mark.png");
        image::RgbaImage::from_pixel(6, 6, image::Rgba([0x33, 0x66, 0x99, 255]))
            .save(&path)
            .unwrap();

        let accent = resolve_accent(path.to_str().unwrap()).unwrap();
        assert_eq!(accent, Rgb::new(0x33, 0x66, 0x99));
    }

    #[test]
    fn test_resolve_background_only_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.png");
        image::RgbaImage::from_pixel(6, 6, image::Rgba([255, 255, 255, 255]))
            .save(&path)
            .unwrap();

        let err = resolve_accent(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, EmblemError::Pipeline { .. }));
    }

    #[test]
    fn test_resolve_nonsense() {
        let err = resolve_accent("sea green").unwrap_err();
        assert!(matches!(err, EmblemError::Colour { .. }));
    }
}
