use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::document::{
    ActionsOrientation, HorizontalAlignment, ImageSize, Spacing, TextColor, TextSize, TextWeight,
};
use crate::error::ConfigError;

/// Theme and layout policy supplied by the host application.
///
/// Every field has a default, so a configuration file only needs the values
/// it changes:
///
/// ```rust
/// use cardtag_render::HostConfig;
///
/// let config = HostConfig::from_yaml(r#"
/// fontFamily: Inter
/// spacing:
///   medium: 24
/// actions:
///   maxActions: 3
/// "#).unwrap();
///
/// assert_eq!(config.font_family, "Inter");
/// assert_eq!(config.spacing.medium, 24);
/// assert_eq!(config.spacing.small, 3);
/// assert_eq!(config.actions.max_actions, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostConfig {
    pub supports_interactivity: bool,
    pub font_family: String,
    pub spacing: SpacingConfig,
    pub separator: SeparatorConfig,
    pub font_sizes: FontSizesConfig,
    pub container_styles: ContainerStylesConfig,
    pub image_sizes: ImageSizesConfig,
    pub actions: ActionsConfig,
    pub fact_set: FactSetConfig,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            supports_interactivity: true,
            font_family: "Segoe UI".to_string(),
            spacing: SpacingConfig::default(),
            separator: SeparatorConfig::default(),
            font_sizes: FontSizesConfig::default(),
            container_styles: ContainerStylesConfig::default(),
            image_sizes: ImageSizesConfig::default(),
            actions: ActionsConfig::default(),
            fact_set: FactSetConfig::default(),
        }
    }
}

impl HostConfig {
    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a configuration file, choosing the format by extension
    /// (`.json`, `.yaml` or `.yml`).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let parse: fn(&str) -> Result<Self, ConfigError> = match extension.as_str() {
            "json" => Self::from_json,
            "yaml" | "yml" => Self::from_yaml,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&content)
    }

    /// Pixels for a spacing keyword.
    pub fn spacing_for(&self, spacing: Spacing) -> u32 {
        self.spacing.get(spacing)
    }

    /// Pixels for a text size keyword.
    pub fn font_size_for(&self, size: TextSize) -> u32 {
        self.font_sizes.get(size)
    }

    /// Hex color for a semantic text color, from the default container style.
    pub fn foreground_color(&self, color: TextColor, subtle: bool) -> &str {
        let colors = self.container_styles.default.foreground_colors.get(color);
        if subtle {
            &colors.subtle
        } else {
            &colors.default
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacingConfig {
    pub small: u32,
    pub default: u32,
    pub medium: u32,
    pub large: u32,
    pub extra_large: u32,
    pub padding: u32,
}

impl Default for SpacingConfig {
    fn default() -> Self {
        Self {
            small: 3,
            default: 8,
            medium: 20,
            large: 30,
            extra_large: 40,
            padding: 20,
        }
    }
}

impl SpacingConfig {
    pub fn get(&self, spacing: Spacing) -> u32 {
        match spacing {
            Spacing::None => 0,
            Spacing::Small => self.small,
            Spacing::Default => self.default,
            Spacing::Medium => self.medium,
            Spacing::Large => self.large,
            Spacing::ExtraLarge => self.extra_large,
            Spacing::Padding => self.padding,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeparatorConfig {
    pub line_thickness: u32,
    pub line_color: String,
}

impl Default for SeparatorConfig {
    fn default() -> Self {
        Self {
            line_thickness: 1,
            line_color: "#B2000000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontSizesConfig {
    pub small: u32,
    pub default: u32,
    pub medium: u32,
    pub large: u32,
    pub extra_large: u32,
}

impl Default for FontSizesConfig {
    fn default() -> Self {
        Self {
            small: 10,
            default: 12,
            medium: 14,
            large: 17,
            extra_large: 20,
        }
    }
}

impl FontSizesConfig {
    pub fn get(&self, size: TextSize) -> u32 {
        match size {
            TextSize::Small => self.small,
            TextSize::Default => self.default,
            TextSize::Medium => self.medium,
            TextSize::Large => self.large,
            TextSize::ExtraLarge => self.extra_large,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerStylesConfig {
    pub default: ContainerStyleConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerStyleConfig {
    pub background_color: String,
    pub foreground_colors: ForegroundColorsConfig,
}

impl Default for ContainerStyleConfig {
    fn default() -> Self {
        Self {
            background_color: "#FFFFFFFF".to_string(),
            foreground_colors: ForegroundColorsConfig::default(),
        }
    }
}

/// A color in its normal and subtle variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontColorConfig {
    pub default: String,
    pub subtle: String,
}

impl FontColorConfig {
    pub fn new(default: &str, subtle: &str) -> Self {
        Self {
            default: default.to_string(),
            subtle: subtle.to_string(),
        }
    }
}

impl Default for FontColorConfig {
    fn default() -> Self {
        Self::new("#FF000000", "#B2000000")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForegroundColorsConfig {
    pub default: FontColorConfig,
    pub dark: FontColorConfig,
    pub light: FontColorConfig,
    pub accent: FontColorConfig,
    pub good: FontColorConfig,
    pub warning: FontColorConfig,
    pub attention: FontColorConfig,
}

impl Default for ForegroundColorsConfig {
    fn default() -> Self {
        Self {
            default: FontColorConfig::new("#FF000000", "#B2000000"),
            dark: FontColorConfig::new("#FF101010", "#B2101010"),
            light: FontColorConfig::new("#FFFFFFFF", "#B2FFFFFF"),
            accent: FontColorConfig::new("#FF0000FF", "#B20000FF"),
            good: FontColorConfig::new("#FF008000", "#B2008000"),
            warning: FontColorConfig::new("#FFFFD700", "#B2FFD700"),
            attention: FontColorConfig::new("#FF8B0000", "#B28B0000"),
        }
    }
}

impl ForegroundColorsConfig {
    pub fn get(&self, color: TextColor) -> &FontColorConfig {
        match color {
            TextColor::Default => &self.default,
            TextColor::Dark => &self.dark,
            TextColor::Light => &self.light,
            TextColor::Accent => &self.accent,
            TextColor::Good => &self.good,
            TextColor::Warning => &self.warning,
            TextColor::Attention => &self.attention,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageSizesConfig {
    pub small: u32,
    pub medium: u32,
    pub large: u32,
}

impl Default for ImageSizesConfig {
    fn default() -> Self {
        Self {
            small: 40,
            medium: 80,
            large: 160,
        }
    }
}

impl ImageSizesConfig {
    /// Pixel width for a fixed size keyword; `None` for Auto and Stretch.
    pub fn get(&self, size: ImageSize) -> Option<u32> {
        match size {
            ImageSize::Small => Some(self.small),
            ImageSize::Medium => Some(self.medium),
            ImageSize::Large => Some(self.large),
            ImageSize::Auto | ImageSize::Stretch => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionsConfig {
    pub actions_orientation: ActionsOrientation,
    pub action_alignment: HorizontalAlignment,
    pub button_spacing: u32,
    pub max_actions: usize,
    pub spacing: Spacing,
    pub show_card: ShowCardConfig,
}

impl Default for ActionsConfig {
    fn default() -> Self {
        Self {
            actions_orientation: ActionsOrientation::Horizontal,
            action_alignment: HorizontalAlignment::Stretch,
            button_spacing: 10,
            max_actions: 5,
            spacing: Spacing::Default,
            show_card: ShowCardConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShowCardConfig {
    pub inline_top_margin: u32,
}

impl Default for ShowCardConfig {
    fn default() -> Self {
        Self {
            inline_top_margin: 16,
        }
    }
}

/// Text styling applied to one column of a fact set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyleConfig {
    pub size: TextSize,
    pub weight: TextWeight,
    pub color: TextColor,
    pub is_subtle: bool,
    pub wrap: bool,
    /// Maximum width in pixels; 0 means unlimited.
    pub max_width: u32,
}

impl Default for TextStyleConfig {
    fn default() -> Self {
        Self {
            size: TextSize::Default,
            weight: TextWeight::Default,
            color: TextColor::Default,
            is_subtle: false,
            wrap: true,
            max_width: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FactSetConfig {
    pub title: TextStyleConfig,
    pub value: TextStyleConfig,
    pub spacing: u32,
}

impl Default for FactSetConfig {
    fn default() -> Self {
        Self {
            title: TextStyleConfig {
                weight: TextWeight::Bolder,
                max_width: 150,
                ..TextStyleConfig::default()
            },
            value: TextStyleConfig::default(),
            spacing: 10,
        }
    }
}
