//! Card body elements: layout containers, text and images.

use serde::{Deserialize, Deserializer};

use super::actions::Action;
use super::keywords::{
    HorizontalAlignment, ImageSize, ImageStyle, Spacing, TextColor, TextSize, TextWeight,
};

/// A block of text, interpreted as markdown.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextBlock {
    pub text: String,
    pub size: TextSize,
    pub weight: TextWeight,
    pub color: TextColor,
    pub is_subtle: bool,
    pub wrap: bool,
    /// Maximum number of visible lines; 0 means unlimited.
    pub max_lines: u32,
    pub horizontal_alignment: HorizontalAlignment,
    pub spacing: Spacing,
    pub separator: bool,
}

impl TextBlock {
    /// Creates a text block with default styling.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// A single image.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Image {
    pub url: String,
    pub alt_text: Option<String>,
    pub size: ImageSize,
    pub style: ImageStyle,
    pub horizontal_alignment: HorizontalAlignment,
    pub select_action: Option<Box<Action>>,
    pub spacing: Spacing,
    pub separator: bool,
}

/// A gallery of images sharing one size.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageSet {
    pub images: Vec<Image>,
    pub image_size: ImageSize,
    pub spacing: Spacing,
    pub separator: bool,
}

impl Default for ImageSet {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            image_size: ImageSize::Medium,
            spacing: Spacing::Default,
            separator: false,
        }
    }
}

/// A vertical group of elements.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Container {
    pub items: Vec<Element>,
    pub select_action: Option<Box<Action>>,
    pub spacing: Spacing,
    pub separator: bool,
}

/// One column of a [`ColumnSet`].
///
/// `width` is the current sizing field; `size` is its legacy spelling and is
/// consulted only when `width` is missing. Both accept a keyword (`auto`,
/// `stretch`) or a relative weight given as a string or a number.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Column {
    pub items: Vec<Element>,
    #[serde(deserialize_with = "loose_string")]
    pub width: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub size: Option<String>,
    pub select_action: Option<Box<Action>>,
    pub spacing: Spacing,
    pub separator: bool,
}

impl Column {
    /// The effective width keyword: `width`, falling back to `size` when
    /// `width` is empty.
    pub fn width_keyword(&self) -> &str {
        match self.width.as_deref().map(str::trim) {
            Some(width) if !width.is_empty() => width,
            _ => self.size.as_deref().map(str::trim).unwrap_or(""),
        }
    }

    /// The relative weight: explicit width if numeric, else legacy size if
    /// numeric, else 0.
    pub fn weight(&self) -> f64 {
        numeric(self.width.as_deref())
            .or_else(|| numeric(self.size.as_deref()))
            .unwrap_or(0.0)
    }
}

fn numeric(value: Option<&str>) -> Option<f64> {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// A horizontal row of columns.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnSet {
    pub columns: Vec<Column>,
    pub select_action: Option<Box<Action>>,
    pub spacing: Spacing,
    pub separator: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Fact {
    pub title: String,
    pub value: String,
}

impl Fact {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// A list of title/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FactSet {
    pub facts: Vec<Fact>,
    pub spacing: Spacing,
    pub separator: bool,
}

/// An element whose `type` is not part of the model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnknownNode {
    pub type_name: String,
}

/// Any card body element.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    TextBlock(TextBlock),
    Image(Image),
    ImageSet(ImageSet),
    Container(Container),
    ColumnSet(ColumnSet),
    FactSet(FactSet),
    TextInput(super::inputs::TextInput),
    NumberInput(super::inputs::NumberInput),
    DateInput(super::inputs::DateInput),
    TimeInput(super::inputs::TimeInput),
    ToggleInput(super::inputs::ToggleInput),
    ChoiceSetInput(super::inputs::ChoiceSetInput),
    Unknown(UnknownNode),
}

impl Element {
    /// Requested gap before this element.
    pub fn spacing(&self) -> Spacing {
        match self {
            Element::TextBlock(e) => e.spacing,
            Element::Image(e) => e.spacing,
            Element::ImageSet(e) => e.spacing,
            Element::Container(e) => e.spacing,
            Element::ColumnSet(e) => e.spacing,
            Element::FactSet(e) => e.spacing,
            Element::TextInput(e) => e.spacing,
            Element::NumberInput(e) => e.spacing,
            Element::DateInput(e) => e.spacing,
            Element::TimeInput(e) => e.spacing,
            Element::ToggleInput(e) => e.spacing,
            Element::ChoiceSetInput(e) => e.spacing,
            Element::Unknown(_) => Spacing::Default,
        }
    }

    /// Whether a visible rule precedes this element.
    pub fn separator(&self) -> bool {
        match self {
            Element::TextBlock(e) => e.separator,
            Element::Image(e) => e.separator,
            Element::ImageSet(e) => e.separator,
            Element::Container(e) => e.separator,
            Element::ColumnSet(e) => e.separator,
            Element::FactSet(e) => e.separator,
            Element::TextInput(e) => e.separator,
            Element::NumberInput(e) => e.separator,
            Element::DateInput(e) => e.separator,
            Element::TimeInput(e) => e.separator,
            Element::ToggleInput(e) => e.separator,
            Element::ChoiceSetInput(e) => e.separator,
            Element::Unknown(_) => false,
        }
    }
}

impl<'de> Deserialize<'de> for Element {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let type_name = super::type_tag(&value);

        Ok(match type_name.as_str() {
            "TextBlock" => Element::TextBlock(super::from_value(value)?),
            "Image" => Element::Image(super::from_value(value)?),
            "ImageSet" => Element::ImageSet(super::from_value(value)?),
            "Container" => Element::Container(super::from_value(value)?),
            "ColumnSet" => Element::ColumnSet(super::from_value(value)?),
            "FactSet" => Element::FactSet(super::from_value(value)?),
            "Input.Text" => Element::TextInput(super::from_value(value)?),
            "Input.Number" => Element::NumberInput(super::from_value(value)?),
            "Input.Date" => Element::DateInput(super::from_value(value)?),
            "Input.Time" => Element::TimeInput(super::from_value(value)?),
            "Input.Toggle" => Element::ToggleInput(super::from_value(value)?),
            "Input.ChoiceSet" => Element::ChoiceSetInput(super::from_value(value)?),
            _ => Element::Unknown(UnknownNode { type_name }),
        })
    }
}

/// Accepts a string, a number, or null for a free-form sizing field.
fn loose_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(
        match Option::<serde_json::Value>::deserialize(deserializer)? {
            Some(serde_json::Value::String(s)) => Some(s),
            Some(serde_json::Value::Number(n)) => Some(n.to_string()),
            _ => None,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(width: Option<&str>, size: Option<&str>) -> Column {
        Column {
            width: width.map(String::from),
            size: size.map(String::from),
            ..Column::default()
        }
    }

    #[test]
    fn test_column_weight_prefers_width() {
        assert_eq!(column(Some("2"), Some("5")).weight(), 2.0);
        assert_eq!(column(Some("auto"), Some("5")).weight(), 5.0);
        assert_eq!(column(Some("stretch"), None).weight(), 0.0);
        assert_eq!(column(None, None).weight(), 0.0);
    }

    #[test]
    fn test_width_keyword_falls_back_to_size() {
        assert_eq!(column(Some("auto"), Some("2")).width_keyword(), "auto");
        assert_eq!(column(Some(""), Some("Stretch")).width_keyword(), "Stretch");
        assert_eq!(column(None, None).width_keyword(), "");
    }

    #[test]
    fn test_column_width_accepts_numbers() {
        let column: Column = serde_json::from_str(r#"{"width": 3, "size": "auto"}"#).unwrap();
        assert_eq!(column.width.as_deref(), Some("3"));
        assert_eq!(column.size.as_deref(), Some("auto"));
    }

    #[test]
    fn test_unknown_element_keeps_type_name() {
        let element: Element = serde_json::from_str(r#"{"type": "Media", "sources": []}"#).unwrap();
        assert_eq!(
            element,
            Element::Unknown(UnknownNode {
                type_name: "Media".to_string()
            })
        );
    }

    #[test]
    fn test_text_block_defaults() {
        let element: Element = serde_json::from_str(r#"{"type": "TextBlock", "text": "hi"}"#).unwrap();
        match element {
            Element::TextBlock(block) => {
                assert_eq!(block.text, "hi");
                assert_eq!(block.spacing, Spacing::Default);
                assert!(!block.separator);
                assert!(!block.wrap);
            }
            other => panic!("unexpected element {:?}", other),
        }
    }

    #[test]
    fn test_image_set_defaults_to_medium() {
        assert_eq!(ImageSet::default().image_size, ImageSize::Medium);
        let set: ImageSet = serde_json::from_str(r#"{"images": []}"#).unwrap();
        assert_eq!(set.image_size, ImageSize::Medium);
    }
}
