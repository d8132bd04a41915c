//! Input elements. Each carries an `id` used as the form field name.

use serde::Deserialize;

use super::keywords::{ChoiceInputStyle, Spacing};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextInput {
    pub id: String,
    pub placeholder: String,
    pub value: String,
    pub is_multiline: bool,
    /// Maximum accepted length; 0 means unlimited.
    pub max_length: u32,
    pub spacing: Spacing,
    pub separator: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberInput {
    pub id: String,
    pub placeholder: String,
    pub value: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub spacing: Spacing,
    pub separator: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateInput {
    pub id: String,
    pub placeholder: String,
    pub value: String,
    pub min: String,
    pub max: String,
    pub spacing: Spacing,
    pub separator: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeInput {
    pub id: String,
    pub placeholder: String,
    pub value: String,
    pub min: String,
    pub max: String,
    pub spacing: Spacing,
    pub separator: bool,
}

/// A checkbox with a label.
///
/// `value_on` / `value_off` default to `"True"` / `"False"` when absent or
/// empty; see [`ToggleInput::effective_value_on`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToggleInput {
    pub id: String,
    pub title: String,
    pub value: String,
    pub value_on: Option<String>,
    pub value_off: Option<String>,
    pub spacing: Spacing,
    pub separator: bool,
}

impl ToggleInput {
    pub const DEFAULT_VALUE_ON: &'static str = "True";
    pub const DEFAULT_VALUE_OFF: &'static str = "False";

    pub fn effective_value_on(&self) -> &str {
        non_empty(self.value_on.as_deref()).unwrap_or(Self::DEFAULT_VALUE_ON)
    }

    pub fn effective_value_off(&self) -> &str {
        non_empty(self.value_off.as_deref()).unwrap_or(Self::DEFAULT_VALUE_OFF)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Choice {
    pub title: String,
    pub value: String,
}

impl Choice {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// A dropdown, radio group or checkbox group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChoiceSetInput {
    pub id: String,
    pub choices: Vec<Choice>,
    /// Current value; comma separated when multi-select.
    pub value: String,
    pub style: ChoiceInputStyle,
    pub is_multi_select: bool,
    pub spacing: Spacing,
    pub separator: bool,
}

impl ChoiceSetInput {
    /// The current value split on commas, trimmed, empties dropped.
    pub fn default_values(&self) -> Vec<&str> {
        self.value
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_defaults() {
        let toggle = ToggleInput::default();
        assert_eq!(toggle.effective_value_on(), "True");
        assert_eq!(toggle.effective_value_off(), "False");

        let toggle = ToggleInput {
            value_on: Some("yes".into()),
            value_off: Some(String::new()),
            ..ToggleInput::default()
        };
        assert_eq!(toggle.effective_value_on(), "yes");
        assert_eq!(toggle.effective_value_off(), "False");
    }

    #[test]
    fn test_choice_default_values() {
        let set = ChoiceSetInput {
            value: " a, b ,,c ".into(),
            ..ChoiceSetInput::default()
        };
        assert_eq!(set.default_values(), vec!["a", "b", "c"]);
        assert!(ChoiceSetInput::default().default_values().is_empty());
    }

    #[test]
    fn test_number_input_deserializes_optional_bounds() {
        let input: NumberInput = serde_json::from_str(r#"{"id": "n", "min": 1, "value": 2.5}"#).unwrap();
        assert_eq!(input.min, Some(1.0));
        assert_eq!(input.max, None);
        assert_eq!(input.value, Some(2.5));
    }
}
