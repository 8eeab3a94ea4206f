//! emblem - Brand theme and logo asset pipeline
//!
//! A library for deriving UI theme variables from a brand's accent colour
//! or logo artwork, and for pre-baking transparent square logo assets at
//! the fixed sizes the web console serves.

pub mod bootstrap;
pub mod cli;
pub mod colour;
pub mod error;
pub mod extract;
pub mod filter;
pub mod loader;
pub mod output;
pub mod pipeline;
pub mod settings;
pub mod theme;

pub use bootstrap::{apply_from_settings, apply_saved_theme, AccentSource, SkipReason, ThemeOutcome};
pub use colour::{hex_to_hsl, Hsl, Rgb};
pub use error::{EmblemError, Result};
pub use extract::{dominant_colour, dominant_colour_from_path};
pub use filter::{
    make_background_transparent, remove_white_background, DISPLAY_THRESHOLD, NEAR_WHITE_TOLERANCE,
};
pub use loader::{decode_rgba, load_rgba, prepare_display_logo, CancelToken};
pub use pipeline::{contain, output_paths, pad_to_square, process_logo, ProcessedAssets};
pub use settings::Settings;
pub use theme::{ThemeContext, ThemeVariables, DEFAULT_ACCENT_HEX};
