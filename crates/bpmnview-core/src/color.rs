//! Color handling for rendered diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Colors are written to SVG as `#rrggbb` hex strings
//! (or `rgba(...)` when translucent) so output is stable regardless of how
//! the color was spelled in configuration.

use std::{fmt, str::FromStr};

use color::{DynamicColor, Srgb};

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a CSS color string such as "#ff0000",
    /// "rgb(255, 0, 0)" or "red".
    ///
    /// # Examples
    ///
    /// ```
    /// use bpmnview_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Pure white, the fill of activities, events and gateways.
    pub fn white() -> Self {
        Self::new("#fff").expect("'#fff' is a valid CSS color")
    }

    /// Returns the alpha (transparency) component of this color, between 0.0 and 1.0.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        if rgba.a == u8::MAX {
            write!(f, "#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
        } else {
            write!(
                f,
                "rgba({}, {}, {}, {})",
                rgba.r,
                rgba.g,
                rgba.b,
                self.alpha()
            )
        }
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#ff0000").is_ok());
        assert!(Color::new("not-a-color").is_err());
    }

    #[test]
    fn test_color_default_is_black() {
        assert_eq!(Color::default().to_string(), "#000000");
    }

    #[test]
    fn test_color_short_hex_expands() {
        assert_eq!(Color::new("#eee").unwrap().to_string(), "#eeeeee");
        assert_eq!(Color::new("#999").unwrap().to_string(), "#999999");
        assert_eq!(Color::white().to_string(), "#ffffff");
    }

    #[test]
    fn test_color_named() {
        assert_eq!(Color::new("red").unwrap().to_string(), "#ff0000");
    }

    #[test]
    fn test_color_translucent_uses_rgba() {
        let color = Color::new("rgba(255, 0, 0, 0.5)").unwrap();
        assert!(color.to_string().starts_with("rgba(255, 0, 0"));
    }
}
