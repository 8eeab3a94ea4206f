//! Theme variable derivation and the context they publish into.
//!
//! A single accent colour fans out into seven CSS custom properties:
//! the primary tone (clamped into a usable band), a hover shade, a muted
//! wash for surfaces, a gradient, a tinted drop shadow, and focus rings.

use serde::Serialize;

use crate::colour::Hsl;
use crate::error::Result;

/// Factory default accent. Stored settings carrying exactly this value are
/// treated as "not configured".
pub const DEFAULT_ACCENT_HEX: &str = "#3b82f6";

/// A complete derived variable set.
///
/// Values are stored exactly as published: bare `H S% L%` triples for the
/// tokens stylesheets wrap in `hsl()` themselves, and full CSS values for
/// the gradient and shadow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ThemeVariables {
    pub primary: String,
    pub ring: String,
    pub primary_hover: String,
    pub primary_muted: String,
    pub gradient_primary: String,
    pub shadow_primary: String,
    pub sidebar_ring: String,
}

impl ThemeVariables {
    /// Derive the full variable set from an accent colour.
    ///
    /// The primary tone is clamped to saturation 30..=95 and lightness
    /// 30..=55. The hover shade shares that clamped saturation; the muted
    /// wash, gradient second stop, shadow, and sidebar derive from the
    /// unclamped input, with their own clamps listed inline.
    pub fn from_hsl(accent: Hsl) -> Self {
        let h = accent.h as i32;
        let s = accent.s as i32;
        let l = accent.l as i32;

        let primary_s = s.clamp(30, 95);
        let primary_l = l.clamp(30, 55);
        let primary = format!("{} {}% {}%", h, primary_s, primary_l);

        let hover_l = (l - 8).clamp(20, 50);
        let muted_s = ((s as f64 * 0.7).round() as i32).clamp(20, 80);
        let muted_l = (l + 45).clamp(60, 96);
        let gradient_l = (l + 5).clamp(35, 65);

        Self {
            ring: primary.clone(),
            primary_hover: format!("{} {}% {}%", h, primary_s, hover_l),
            primary_muted: format!("{} {}% {}%", h, muted_s, muted_l),
            gradient_primary: format!(
                "linear-gradient(135deg, hsl({}), hsl({} {}% {}%))",
                primary, h, s, gradient_l
            ),
            shadow_primary: format!("0 10px 25px -5px hsl({} {}% {}% / 0.25)", h, s, l),
            sidebar_ring: format!("{} {}% {}%", h, s, l),
            primary,
        }
    }

    /// Derive the variable set from a hex accent string.
    pub fn from_hex(hex: &str) -> Result<Self> {
        Ok(Self::from_hsl(crate::colour::hex_to_hsl(hex)?))
    }

    /// The set as `(name, value)` pairs, in publish order. Names carry no
    /// `--` prefix.
    pub fn entries(&self) -> [(&'static str, &str); 7] {
        [
            ("primary", &self.primary),
            ("ring", &self.ring),
            ("primary-hover", &self.primary_hover),
            ("primary-muted", &self.primary_muted),
            ("gradient-primary", &self.gradient_primary),
            ("shadow-primary", &self.shadow_primary),
            ("sidebar-ring", &self.sidebar_ring),
        ]
    }

    /// Render as a block of CSS custom property declarations.
    pub fn css_block(&self) -> String {
        let lines: Vec<String> = self
            .entries()
            .iter()
            .map(|(name, value)| format!("--{}: {};", name, value))
            .collect();
        lines.join("\n")
    }
}

/// Where derived variable sets get published.
///
/// Rendering code reads the active set from here; a context with nothing
/// applied means the stylesheet defaults are in effect. `apply` swaps the
/// whole set at once, so a half-updated mix of old and new tokens is
/// unrepresentable.
#[derive(Debug, Default)]
pub struct ThemeContext {
    active: Option<ThemeVariables>,
}

impl ThemeContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a variable set, replacing any previous one.
    pub fn apply(&mut self, variables: ThemeVariables) {
        self.active = Some(variables);
    }

    /// The currently applied set, if any.
    pub fn active(&self) -> Option<&ThemeVariables> {
        self.active.as_ref()
    }

    /// True when no set has been applied yet.
    pub fn is_default(&self) -> bool {
        self.active.is_none()
    }
}
