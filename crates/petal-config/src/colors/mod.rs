//! Color parsing and validation utilities.
//!
//! Supports `#RGB`, `#RRGGBB`, `#RRGGBBAA`, and `rgb(r,g,b)`. Terminals
//! have no alpha channel, so an alpha component is parsed but ignored
//! when rendering.

mod parse;


use petal_common::{Color, ConfigError};

use parse::{parse_hex, parse_rgb, HEX_RE, RGB_RE};

/// Parse a color string into a [`Color`].
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();

    if s.starts_with('#') {
        if let Some(color) = parse_hex(s) {
            return Ok(color);
        }
        return Err(ConfigError::ParseError(format!("invalid hex color: {s}")));
    }

    if s.starts_with("rgb(") {
        if let Some(color) = parse_rgb(s) {
            return Ok(color);
        }
        return Err(ConfigError::ParseError(format!("invalid rgb color: {s}")));
    }

    Err(ConfigError::ParseError(format!(
        "unrecognized color format: {s}"
    )))
}

/// Validate that a string is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    if s.starts_with('#') {
        return HEX_RE.is_match(s);
    }
    if s.starts_with("rgb(") {
        return RGB_RE.is_match(s) && parse_rgb(s).is_some();
    }
    false
}
