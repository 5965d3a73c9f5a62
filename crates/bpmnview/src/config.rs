//! Configuration types for BPMN rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file by the CLI or any other source.
//!
//! - [`AppConfig`] - Top-level configuration combining canvas and style settings.
//! - [`CanvasConfig`] - Logical size of the drawing canvas (the SVG `viewBox`).
//! - [`StyleConfig`] - Visual options such as the background color.
//!
//! # Example
//!
//! ```
//! # use bpmnview::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.canvas().width(), 800.0);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use bpmnview_core::{color::Color, geometry::Size};

/// Top-level application configuration combining canvas and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified canvas and style configurations.
    pub fn new(canvas: CanvasConfig, style: StyleConfig) -> Self {
        Self { canvas, style }
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Logical canvas size. DI coordinates are drawn 1:1 into this viewport;
/// the rendered SVG always fills its container (`width`/`height` of `100%`).
#[derive(Debug, Clone, Deserialize)]
pub struct CanvasConfig {
    #[serde(default = "CanvasConfig::default_width")]
    width: f32,

    #[serde(default = "CanvasConfig::default_height")]
    height: f32,
}

impl CanvasConfig {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns the canvas size as the `viewBox` extent.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is not a finite, positive number.
    pub fn viewport(&self) -> Result<Size, String> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!(
                    "Invalid canvas {name} in config: {value} (expected a positive number)"
                ));
            }
        }
        Ok(Size::new(self.width, self.height))
    }

    fn default_width() -> f32 {
        800.0
    }

    fn default_height() -> f32 {
        600.0
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self::new(Self::default_width(), Self::default_height())
    }
}

/// Visual styling configuration for rendered diagrams.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] painted behind the diagram, as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    pub fn new(background_color: Option<String>) -> Self {
        Self { background_color }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}
