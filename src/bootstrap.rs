//! Startup theming from stored settings.
//!
//! Runs once at launch: a stored accent wins, a logo-derived accent is the
//! fallback, and everything else leaves the stylesheet defaults alone.
//! Failures never propagate out of here; a broken settings file or missing
//! logo must not take the UI down with it.

use std::path::Path;

use crate::colour::Rgb;
use crate::extract;
use crate::settings::Settings;
use crate::theme::{ThemeContext, ThemeVariables, DEFAULT_ACCENT_HEX};

/// Which input supplied the applied accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccentSource {
    /// The settings record carried a usable accent colour.
    StoredColour,
    /// The accent was sampled from the stored company logo.
    LogoExtraction,
}

/// Why startup left the defaults in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No settings file at the given path.
    MissingSettings,
    /// The settings file exists but does not parse.
    MalformedSettings,
    /// Settings parsed but carry neither a custom accent nor a logo.
    NothingConfigured,
    /// A logo is configured but yields no dominant colour.
    NoDominantColour,
}

/// What startup theming did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeOutcome {
    Applied { source: AccentSource, accent: Rgb },
    Skipped(SkipReason),
}

impl ThemeOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ThemeOutcome::Applied { .. })
    }
}

/// Apply the saved theme, reading settings from `settings_path`.
pub fn apply_saved_theme(settings_path: &Path, ctx: &mut ThemeContext) -> ThemeOutcome {
    if !settings_path.exists() {
        return ThemeOutcome::Skipped(SkipReason::MissingSettings);
    }
    let settings = match Settings::load(settings_path) {
        Ok(settings) => settings,
        Err(_) => return ThemeOutcome::Skipped(SkipReason::MalformedSettings),
    };
    apply_from_settings(&settings, ctx)
}

/// Apply the saved theme from an already-loaded settings record.
///
/// A stored accent equal to the factory default means the owner never
/// picked one, so the logo branch gets its chance. The comparison is on
/// the raw string; `#3B82F6` spelled differently counts as a real choice.
/// An accent that fails to parse is treated the same as none at all.
pub fn apply_from_settings(settings: &Settings, ctx: &mut ThemeContext) -> ThemeOutcome {
    if let Some(hex) = settings.effective_accent() {
        if hex != DEFAULT_ACCENT_HEX {
            if let Ok(accent) = Rgb::from_hex(hex) {
                ctx.apply(ThemeVariables::from_hsl(accent.to_hsl()));
                return ThemeOutcome::Applied {
                    source: AccentSource::StoredColour,
                    accent,
                };
            }
        }
    }

    if let Some(logo) = &settings.company_logo {
        return match extract::dominant_colour_from_path(logo) {
            Some(accent) => {
                ctx.apply(ThemeVariables::from_hsl(accent.to_hsl()));
                ThemeOutcome::Applied {
                    source: AccentSource::LogoExtraction,
                    accent,
                }
            }
            None => ThemeOutcome::Skipped(SkipReason::NoDominantColour),
        };
    }

    ThemeOutcome::Skipped(SkipReason::NothingConfigured)
}
