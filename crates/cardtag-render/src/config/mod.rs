//! Host configuration: spacing, colors, fonts and sizing rules.
//!
//! A [`HostConfig`] is immutable for the duration of a render pass. It can be
//! built in code, or loaded from JSON or YAML where missing fields take their
//! defaults.

mod color;
mod host;

pub use color::css_color;
pub use host::{
    ActionsConfig, ContainerStyleConfig, ContainerStylesConfig, FactSetConfig, FontColorConfig,
    FontSizesConfig, ForegroundColorsConfig, HostConfig, ImageSizesConfig, SeparatorConfig,
    ShowCardConfig, SpacingConfig, TextStyleConfig,
};
