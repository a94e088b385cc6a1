//! Color parsing and validation utilities.
//!
//! Supports `#RGB`, `#RRGGBB`, `#RRGGBBAA`, and `rgb()`/`rgba()` formats.
//! In the `rgba()` format, the alpha component can be either 0-255 (integer)
//! or 0.0-1.0 (float), matching CSS conventions.

mod parse;

#[cfg(test)]
mod tests;

use bubble_common::types::Color;
use bubble_common::ConfigError;

use parse::{parse_hex, parse_rgb, HEX_RE, RGB_RE};

/// Parse a color string into a [`Color`].
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();

    if s.starts_with('#') {
        return parse_hex(s).ok_or_else(|| ConfigError::ParseError(format!("invalid hex color: {s}")));
    }

    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return parse_rgb(s).ok_or_else(|| ConfigError::ParseError(format!("invalid rgb color: {s}")));
    }

    Err(ConfigError::ParseError(format!(
        "unrecognized color format: {s}"
    )))
}

/// Parse a color, falling back to `fallback` (logged) when it is malformed.
pub fn parse_color_or(s: &str, fallback: Color) -> Color {
    parse_color(s).unwrap_or_else(|e| {
        tracing::warn!("{e}, using {}", fallback.to_hex());
        fallback
    })
}

/// Validate that a string is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    if s.starts_with('#') {
        return HEX_RE.is_match(s);
    }
    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return RGB_RE.is_match(s) && parse_rgb(s).is_some();
    }
    false
}
